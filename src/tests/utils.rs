use crate::app::App;
use crate::config::AppConfig;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// Fresh app over the built-in dataset, with an untouched session.
pub fn test_app() -> App {
    App::from_config(AppConfig::default())
        .unwrap_or_else(|e| panic!("App initialization failed: {e}"))
}

pub fn request(method: Method, uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn body_string(mut resp: Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
