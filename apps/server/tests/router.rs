use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use folio::contact::{MailError, Mailer, OutboundMessage};
use folio::domain::config::{ApiConfig, SslConfig};
use folio_server::Server;
use serde_json::{Value, json};
use std::fs;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Debug, Default)]
struct Outbox(Mutex<Vec<OutboundMessage>>);

#[async_trait]
impl Mailer for Outbox {
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailError> {
        self.0.lock().expect("outbox lock").push(message.clone());
        Ok(())
    }
}

fn server(cfg: ApiConfig, outbox: Arc<Outbox>) -> Server {
    Server::builder().config(cfg).mailer(outbox).build().expect("server")
}

async fn send(app: Router, method: &str, uri: &str, body: Body) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, bytes.to_vec())
}

#[tokio::test]
async fn health_reports_mail_state() {
    let mut cfg = ApiConfig::default();
    cfg.mail.user = Some("owner@example.com".to_owned());
    cfg.mail.password = Some("secret".to_owned());

    let app = server(cfg, Arc::default()).router();
    let (status, body) = send(app, "GET", "/health", Body::empty()).await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).expect("json");
    assert_eq!(body["status"], "up");
    assert_eq!(body["mail"], "configured");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn contact_submission_goes_through_full_stack() {
    let mut cfg = ApiConfig::default();
    cfg.mail.user = Some("owner@example.com".to_owned());
    let outbox = Arc::new(Outbox::default());

    let app = server(cfg, outbox.clone()).router();
    let payload = json!({ "name": "Ava", "email": "ava@x.com", "message": "Hi" }).to_string();
    let (status, body) = send(app, "POST", "/api/contact", Body::from(payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body).expect("json"), json!({ "success": true }));

    let sent = outbox.0.lock().expect("outbox lock");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to.as_deref(), Some("owner@example.com"));
}

#[tokio::test]
async fn contact_rejects_other_methods() {
    let app = server(ApiConfig::default(), Arc::default()).router();
    let (status, body) = send(app, "GET", "/api/contact", Body::empty()).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        serde_json::from_slice::<Value>(&body).expect("json"),
        json!({ "error": "Method not allowed" })
    );
}

#[tokio::test]
async fn docs_are_served() {
    let app = server(ApiConfig::default(), Arc::default()).router();
    let (status, body) = send(app, "GET", "/docs", Body::empty()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&body).contains("/api/contact"));
}

#[tokio::test]
async fn static_site_falls_back_to_index() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("index.html"), "<div id=\"app\"></div>").expect("write index");
    fs::write(dir.path().join("app.js"), "console.log('folio')").expect("write asset");

    let mut cfg = ApiConfig::default();
    cfg.site.static_dir = Some(dir.path().to_path_buf());
    let app = server(cfg, Arc::default()).router();

    let (status, body) = send(app.clone(), "GET", "/app.js", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"console.log('folio')");

    let (status, body) = send(app.clone(), "GET", "/projects/folio", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<div id=\"app\"></div>");

    let (status, _) = send(app, "GET", "/health", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_path_without_site_is_not_found() {
    let app = server(ApiConfig::default(), Arc::default()).router();
    let (status, _) = send(app, "GET", "/about", Body::empty()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn missing_certificate_fails_build() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut cfg = ApiConfig::default();
    cfg.server.ssl =
        Some(SslConfig { cert: dir.path().join("cert.pem"), key: dir.path().join("key.pem") });

    let err = Server::builder().config(cfg).mailer(Arc::new(Outbox::default())).build().unwrap_err();
    assert!(err.to_string().contains("SSL certificate not found"));
}

#[test]
fn port_override_is_applied() {
    let server = Server::builder().port(8088).mailer(Arc::new(Outbox::default())).build().expect("server");
    assert_eq!(server.state().config.server.port, 8088);
}
