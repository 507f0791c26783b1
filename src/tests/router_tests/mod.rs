mod api_tests;
mod catalog_tests;
mod favorites_tests;
mod map_tests;
