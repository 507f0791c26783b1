// src/tests/router_tests/map_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, location, request, test_app};
use http::Method;

#[test]
fn map_places_every_listing_without_selection() {
    let app = test_app();

    let body = body_string(handle(request(Method::GET, "/map"), &app).unwrap());
    assert_eq!(body.matches("data-listing=").count(), 6);
    assert!(body.contains("Click a marker to see the listing."));
    // listing 5 sits on the south-west corner of the default box
    assert!(body.contains("left: 0.00%; top: 100.00%;"));
}

#[test]
fn selecting_a_marker_shows_the_panel() {
    let app = test_app();

    let resp = handle(request(Method::POST, "/map/select?id=4"), &app).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/map");

    let body = body_string(handle(request(Method::GET, "/map"), &app).unwrap());
    assert_eq!(body.matches("class=\"marker selected\"").count(), 1);
    assert!(body.contains("selected-listing"));
    assert!(body.contains("Premium villa"));
    assert!(!body.contains("Click a marker to see the listing."));
}

#[test]
fn selection_survives_filtering_it_out() {
    let app = test_app();

    handle(request(Method::POST, "/map/select?id=4"), &app).unwrap();
    handle(request(Method::GET, "/catalog?category=apartment"), &app).unwrap();

    let body = body_string(handle(request(Method::GET, "/map"), &app).unwrap());
    assert!(body.contains("selected-listing"));
}

#[test]
fn clear_returns_to_hint() {
    let app = test_app();

    handle(request(Method::POST, "/map/select?id=2"), &app).unwrap();
    let resp = handle(request(Method::POST, "/map/clear"), &app).unwrap();
    assert_eq!(resp.status(), 303);

    let body = body_string(handle(request(Method::GET, "/map"), &app).unwrap());
    assert!(body.contains("Click a marker to see the listing."));
}

#[test]
fn selecting_unknown_listing_is_not_found() {
    let app = test_app();

    assert!(matches!(
        handle(request(Method::POST, "/map/select?id=99"), &app),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        handle(request(Method::POST, "/map/select?id=x"), &app),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn catalog_and_favorites_cards_select_on_the_map() {
    let app = test_app();

    let catalog = body_string(handle(request(Method::GET, "/catalog"), &app).unwrap());
    assert_eq!(catalog.matches("action=\"/map/select?id=").count(), 6);

    handle(request(Method::POST, "/favorites/toggle?id=6"), &app).unwrap();
    let favorites = body_string(handle(request(Method::GET, "/favorites"), &app).unwrap());
    assert!(favorites.contains("action=\"/map/select?id=6\""));

    let resp = handle(request(Method::POST, "/map/select?id=6"), &app).unwrap();
    assert_eq!(location(&resp), "/map");

    let body = body_string(handle(request(Method::GET, "/map"), &app).unwrap());
    assert!(body.contains("selected-listing"));
    assert!(body.contains("Cosy townhouse"));
}
