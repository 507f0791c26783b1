// src/tests/router_tests/api_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, request, test_app};
use http::Method;
use serde_json::Value;

fn get_json(app: &crate::app::App, uri: &str) -> Value {
    let resp = handle(request(Method::GET, uri), app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()
            .get("Content-Type")
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    serde_json::from_str(&body_string(resp)).unwrap()
}

#[test]
fn listings_endpoint_filters_without_touching_session() {
    let app = test_app();

    let json = get_json(&app, "/api/listings?category=townhouse");
    assert_eq!(json["count"], 2);
    assert_eq!(json["is_filtered"], true);
    assert_eq!(json["listings"][0]["id"], 2);
    assert_eq!(json["listings"][0]["price_label"], "18.9 million RUB");
    assert_eq!(json["listings"][1]["id"], 6);

    let json = get_json(&app, "/api/listings");
    assert_eq!(json["count"], 6);
    assert_eq!(json["is_filtered"], false);
}

#[test]
fn listings_endpoint_follows_session_filter_and_favorites() {
    let app = test_app();
    handle(request(Method::GET, "/catalog?rooms=3"), &app).unwrap();
    handle(request(Method::POST, "/favorites/toggle?id=5"), &app).unwrap();

    let json = get_json(&app, "/api/listings");
    let ids: Vec<u64> = json["listings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 5]);
    assert_eq!(json["listings"][0]["is_favorite"], false);
    assert_eq!(json["listings"][1]["is_favorite"], true);
}

#[test]
fn listings_endpoint_rejects_inverted_area() {
    let app = test_app();

    assert!(matches!(
        handle(request(Method::GET, "/api/listings?area_min=150&area_max=50"), &app),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn markers_endpoint_projects_and_flags_selection() {
    let app = test_app();
    handle(request(Method::POST, "/map/select?id=5"), &app).unwrap();

    let json = get_json(&app, "/api/markers");
    assert_eq!(json["selected"], 5);

    let markers = json["markers"].as_array().unwrap();
    assert_eq!(markers.len(), 6);

    let corner = &markers[4];
    assert_eq!(corner["id"], 5);
    assert_eq!(corner["x"], 0.0);
    assert_eq!(corner["y"], 1.0);
    assert_eq!(corner["selected"], true);
    assert_eq!(markers[0]["selected"], false);
}

#[test]
fn markers_endpoint_reports_no_selection_as_null() {
    let app = test_app();

    let json = get_json(&app, "/api/markers");
    assert!(json["selected"].is_null());
}
