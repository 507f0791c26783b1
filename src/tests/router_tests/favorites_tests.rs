// src/tests/router_tests/favorites_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, location, request, test_app};
use http::Method;

#[test]
fn favorites_start_empty() {
    let app = test_app();

    let body = body_string(handle(request(Method::GET, "/favorites"), &app).unwrap());
    assert!(body.contains("saved any listings yet"));
    assert!(!body.contains("class=\"badge\""));
}

#[test]
fn toggle_adds_listing_and_redirects_to_next() {
    let app = test_app();

    let resp = handle(
        request(Method::POST, "/favorites/toggle?id=2&next=%2Fcatalog"),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/catalog");

    let body = body_string(handle(request(Method::GET, "/favorites"), &app).unwrap());
    assert!(body.contains("Modern townhouse"));
    assert!(body.contains(r#"<span class="badge">1</span>"#));
    assert!(body.contains("is-favorite"));
}

#[test]
fn double_toggle_leaves_favorites_unchanged() {
    let app = test_app();

    handle(request(Method::POST, "/favorites/toggle?id=3"), &app).unwrap();
    handle(request(Method::POST, "/favorites/toggle?id=3"), &app).unwrap();

    let body = body_string(handle(request(Method::GET, "/favorites"), &app).unwrap());
    assert!(body.contains("saved any listings yet"));
}

#[test]
fn favorites_page_uses_catalog_order() {
    let app = test_app();

    handle(request(Method::POST, "/favorites/toggle?id=6"), &app).unwrap();
    handle(request(Method::POST, "/favorites/toggle?id=1"), &app).unwrap();

    let body = body_string(handle(request(Method::GET, "/favorites"), &app).unwrap());
    let first = body.find("Eco apartment with terrace").unwrap();
    let sixth = body.find("Cosy townhouse").unwrap();
    assert!(first < sixth);
}

#[test]
fn external_next_falls_back_to_favorites() {
    let app = test_app();

    let resp = handle(
        request(
            Method::POST,
            "/favorites/toggle?id=1&next=https%3A%2F%2Fexample.com",
        ),
        &app,
    )
    .unwrap();
    assert_eq!(location(&resp), "/favorites");
}

#[test]
fn toggle_rejects_unknown_and_missing_ids() {
    let app = test_app();

    assert!(matches!(
        handle(request(Method::POST, "/favorites/toggle?id=42"), &app),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        handle(request(Method::POST, "/favorites/toggle"), &app),
        Err(ServerError::BadRequest(_))
    ));
    assert!(matches!(
        handle(request(Method::GET, "/favorites/toggle?id=1"), &app),
        Err(ServerError::NotFound)
    ));
}
