#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use folio_contact::{MailError, Mailer, OutboundMessage};
use folio_kernel::domain::config::{ApiConfig, MailConfig};
use folio_kernel::server::ApiState;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Mailer that records messages instead of sending them.
#[derive(Debug, Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundMessage>>,
    failure: Option<String>,
}

impl RecordingMailer {
    pub fn failing(message: &str) -> Self {
        Self { sent: Mutex::default(), failure: Some(message.to_owned()) }
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().expect("mailer lock").clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailError> {
        if let Some(failure) = &self.failure {
            return Err(MailError::from(failure.clone()));
        }
        self.sent.lock().expect("mailer lock").push(message.clone());
        Ok(())
    }
}

pub fn mail_config() -> MailConfig {
    MailConfig {
        user: Some("owner@example.com".to_owned()),
        password: Some("app-password".to_owned()),
        ..MailConfig::default()
    }
}

pub fn app(mailer: Arc<RecordingMailer>) -> Router {
    let config = ApiConfig::default();
    let slice = folio_contact::init_with_mailer(&mail_config(), mailer);
    let state = ApiState::builder().config(config).register_slice(slice).build().expect("state");

    let (router, _) = folio_contact::router().split_for_parts();
    router.with_state(state)
}

pub fn app_without_slice() -> Router {
    let state = ApiState::builder().config(ApiConfig::default()).build().expect("state");
    let (router, _) = folio_contact::router().split_for_parts();
    router.with_state(state)
}

pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("json body")
    }
}

pub async fn call(app: Router, method: &str, body: impl Into<Body>) -> Reply {
    let request = Request::builder()
        .method(method)
        .uri("/api/contact")
        .header("content-type", "application/json")
        .body(body.into())
        .expect("request");

    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("body").to_vec();

    Reply { status, headers, body }
}

pub fn assert_access_headers(headers: &HeaderMap) {
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "POST,OPTIONS");
    assert_eq!(
        headers["access-control-allow-headers"],
        "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, Content-MD5, Content-Type, Date, X-Api-Version"
    );
}
