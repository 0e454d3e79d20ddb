use crate::mailer::MailError;
use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_derive::api_model;
use folio_kernel::server::ApiStateError;
use std::borrow::Cow;

pub const MISSING_FIELDS: &str = "All fields are required";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const SEND_FAILED: &str = "Failed to send email";

/// Errors of the contact slice, one response per variant family.
#[folio_derive::folio_error]
pub enum ContactError {
    /// A required form field is missing or empty.
    #[error("Contact validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The endpoint was called with a method other than `POST` or `OPTIONS`.
    #[error("Method not allowed{}: {method}", format_context(.context))]
    MethodNotAllowed { method: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The mailer could not deliver the message.
    #[error("Contact delivery error{}: {source}", format_context(.context))]
    Delivery { source: MailError, context: Option<Cow<'static, str>> },

    /// The request body could not be read (e.g. it exceeds the body limit).
    #[error("Unreadable contact body{}: {source}", format_context(.context))]
    Body { source: BytesRejection, context: Option<Cow<'static, str>> },

    /// The request body is not valid JSON.
    #[error("Malformed contact payload{}: {source}", format_context(.context))]
    Payload { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// The contact slice is not registered in the API state.
    #[error("Contact state error{}: {source}", format_context(.context))]
    State { source: ApiStateError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal contact error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[api_model]
/// Error body returned by the contact endpoint.
pub struct ErrorResponse {
    /// Error kind
    pub error: String,
    /// Underlying failure message, only for server errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ContactError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Delivery { .. }
            | Self::Body { .. }
            | Self::Payload { .. }
            | Self::State { .. }
            | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Failure detail reported to the caller for server errors.
    #[must_use]
    pub fn details(&self) -> Option<String> {
        match self {
            Self::Validation { .. } | Self::MethodNotAllowed { .. } => None,
            Self::Delivery { source, .. } => Some(source.to_string()),
            Self::Body { source, .. } => Some(source.body_text()),
            Self::Payload { source, .. } => Some(source.to_string()),
            Self::State { source, .. } => Some(source.to_string()),
            Self::Internal { message, .. } => Some(message.to_string()),
        }
    }

    #[must_use]
    pub fn body(&self) -> ErrorResponse {
        let error = match self {
            Self::Validation { .. } => MISSING_FIELDS,
            Self::MethodNotAllowed { .. } => METHOD_NOT_ALLOWED,
            _ => SEND_FAILED,
        };
        ErrorResponse { error: error.to_owned(), details: self.details() }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
