// src/tests/router_tests/catalog_tests.rs

use crate::errors::ServerError;
use crate::router::{handle, respond};
use crate::tests::utils::{body_string, location, request, test_app};
use http::Method;

#[test]
fn catalog_lists_everything_by_default() {
    let app = test_app();

    let resp = handle(request(Method::GET, "/catalog"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Found: <strong>6</strong>"));
    assert_eq!(body.matches("listing-card").count(), 6);
}

#[test]
fn price_filter_keeps_dataset_order_and_sticks_to_session() {
    let app = test_app();

    let uri = "/catalog?price_min=10000000&price_max=16000000&area_min=0&area_max=200&category=any&rooms=any";
    let body = body_string(handle(request(Method::GET, uri), &app).unwrap());

    assert!(body.contains("Found: <strong>2</strong>"));
    let first = body.find("Eco apartment with terrace").unwrap();
    let fifth = body.find("Family apartment").unwrap();
    assert!(first < fifth);
    assert!(!body.contains("Modern townhouse"));

    // the filter lives in the session, so a bare reload shows the same result
    let body = body_string(handle(request(Method::GET, "/catalog"), &app).unwrap());
    assert!(body.contains("Found: <strong>2</strong>"));
}

#[test]
fn reset_restores_full_catalog() {
    let app = test_app();

    handle(request(Method::GET, "/catalog?category=villa"), &app).unwrap();

    let resp = handle(request(Method::POST, "/catalog/reset"), &app).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/catalog");

    let body = body_string(handle(request(Method::GET, "/catalog"), &app).unwrap());
    assert!(body.contains("Found: <strong>6</strong>"));
}

#[test]
fn empty_match_says_so() {
    let app = test_app();

    let body = body_string(
        handle(request(Method::GET, "/catalog?category=villa&rooms=1"), &app).unwrap(),
    );
    assert!(body.contains("Found: <strong>0</strong>"));
    assert!(body.contains("No listings match these filters."));
}

#[test]
fn inverted_range_is_a_bad_request_and_keeps_previous_filter() {
    let app = test_app();
    handle(request(Method::GET, "/catalog?category=townhouse"), &app).unwrap();

    let result = handle(
        request(Method::GET, "/catalog?price_min=30000000&price_max=10000000"),
        &app,
    );
    assert!(matches!(result, Err(ServerError::BadRequest(_))));

    let body = body_string(handle(request(Method::GET, "/catalog"), &app).unwrap());
    assert!(body.contains("Found: <strong>2</strong>"));
}

#[test]
fn malformed_query_value_renders_400_page() {
    let app = test_app();

    let resp = respond(request(Method::GET, "/catalog?rooms=lots"), &app);
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("invalid rooms"));
}

#[test]
fn listing_detail_and_misses() {
    let app = test_app();

    let body = body_string(handle(request(Method::GET, "/listings/4"), &app).unwrap());
    assert!(body.contains("Premium villa"));
    assert!(body.contains("35.0 million RUB"));
    assert!(body.contains("180 m²"));

    assert!(matches!(
        handle(request(Method::GET, "/listings/99"), &app),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        handle(request(Method::GET, "/listings/abc"), &app),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn unknown_route_is_404() {
    let app = test_app();

    let resp = respond(request(Method::GET, "/contact"), &app);
    assert_eq!(resp.status(), 404);
}

#[test]
fn home_features_first_three_listings() {
    let app = test_app();

    let body = body_string(handle(request(Method::GET, "/"), &app).unwrap());
    assert_eq!(body.matches("listing-card").count(), 3);
    assert!(body.contains("Spacious studio"));
    assert!(!body.contains("Premium villa"));
}

#[test]
fn any_sentinel_is_case_insensitive() {
    let app = test_app();

    let resp = handle(request(Method::GET, "/catalog?category=Any&rooms=ANY"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Found: <strong>6</strong>"));
}
