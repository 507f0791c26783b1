pub mod catalog;
pub mod favorites;
pub mod home;
pub mod listing;
pub mod map;

pub use catalog::{catalog_page, CatalogVm};
pub use favorites::favorites_page;
pub use home::home_page;
pub use listing::listing_page;
pub use map::{map_page, MapVm};
