//! Access-control headers for endpoints called from the browser.
//!
//! The header set is fixed and written on every response of the wrapped
//! routes, including preflight, client errors and server errors.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, HeaderMap,
};
use axum::middleware::Next;
use axum::response::Response;
use folio_domain::constants::{ALLOW_CREDENTIALS, ALLOW_HEADERS, ALLOW_METHODS, ALLOW_ORIGIN};

/// Middleware that stamps the access-control headers onto the response.
///
/// Wildcard origin with credentials is rejected by `tower_http::cors`, so the
/// headers are written verbatim instead.
///
/// ```rust,ignore
/// router.layer(axum::middleware::from_fn(access_control))
/// ```
pub async fn access_control(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    apply_access_headers(response.headers_mut());
    response
}

/// Writes the access-control header set, replacing existing values.
pub fn apply_access_headers(headers: &mut HeaderMap) {
    headers.insert(ACCESS_CONTROL_ALLOW_CREDENTIALS, HeaderValue::from_static(ALLOW_CREDENTIALS));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static(ALLOW_ORIGIN));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS));
}
