//! Request builders and response probes shared by the route tests.

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use tower::ServiceExt;

use super::app;
use super::token::COOKIE_NAME;
use crate::state::AppState;

pub async fn send(state: AppState, req: Request<Body>) -> Response {
    app(state).oneshot(req).await.unwrap()
}

fn with_cookie(builder: axum::http::request::Builder, token: Option<&str>) -> axum::http::request::Builder {
    match token {
        Some(token) => builder.header(COOKIE, format!("{COOKIE_NAME}={token}")),
        None => builder,
    }
}

pub fn get(path: &str, token: Option<&str>) -> Request<Body> {
    with_cookie(Request::builder().method("GET").uri(path), token)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(path: &str, token: Option<&str>, body: &str) -> Request<Body> {
    with_cookie(Request::builder().method("POST").uri(path), token)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Assert a redirect with `status` and return its target.
pub fn redirect_target(resp: &Response, status: StatusCode) -> String {
    assert_eq!(resp.status(), status, "unexpected status");
    resp.headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("redirect without Location")
        .to_string()
}

/// The `Set-Cookie` header for the session cookie, if any.
pub fn session_set_cookie(resp: &Response) -> Option<String> {
    resp.headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with(&format!("{COOKIE_NAME}=")))
        .map(str::to_string)
}

pub async fn json_body(resp: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
