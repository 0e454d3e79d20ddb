use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware::from_fn;
use axum::routing::get;
use folio_kernel::prelude::access_control;
use tower::ServiceExt;

fn app() -> Router {
    Router::new()
        .route("/ok", get(|| async { "ok" }))
        .route("/fail", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .layer(from_fn(access_control))
}

async fn headers_for(uri: &str) -> axum::http::HeaderMap {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    response.headers().clone()
}

#[tokio::test]
async fn headers_are_written_on_success_and_failure() {
    for uri in ["/ok", "/fail"] {
        let headers = headers_for(uri).await;
        assert_eq!(headers["access-control-allow-credentials"], "true", "{uri}");
        assert_eq!(headers["access-control-allow-origin"], "*", "{uri}");
        assert_eq!(headers["access-control-allow-methods"], "POST,OPTIONS", "{uri}");
        assert_eq!(
            headers["access-control-allow-headers"],
            "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, Content-MD5, Content-Type, Date, X-Api-Version",
            "{uri}"
        );
    }
}
