use crate::Contact;
use crate::error::{ContactError, ContactErrorExt, ErrorResponse};
use crate::model::{ContactForm, ContactSubmission, OutboundMessage};
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::{Method, StatusCode};
use folio_derive::{api_handler, api_model};
use folio_domain::constants::CONTACT_TAG;
use folio_kernel::server::ApiState;
use tracing::{error, info, warn};

#[api_model]
/// Successful submission.
pub struct SubmitResponse {
    /// Always `true`
    pub success: bool,
}

#[api_handler(
    post,
    path = "/api/contact",
    request_body = ContactForm,
    responses(
        (status = OK, description = "Message forwarded", body = SubmitResponse),
        (status = BAD_REQUEST, description = "A field is missing or empty", body = ErrorResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Delivery failed", body = ErrorResponse),
    ),
    tag = CONTACT_TAG,
)]
pub(crate) async fn submit_contact(
    State(state): State<ApiState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SubmitResponse>, ContactError> {
    let contact = state.try_get_slice::<Contact>().context("Resolving contact slice")?;
    let body = body.context("Reading contact form body")?;
    let form = ContactForm::from_body(&body).context("Decoding contact form")?;

    info!(
        name = presence(form.name.as_deref()),
        email = presence(form.email.as_deref()),
        "Received form submission"
    );

    let submission = validate(form)?;
    deliver(contact, &submission).await?;

    info!("Email sent successfully");
    Ok(Json(SubmitResponse { success: true }))
}

/// Answers a cross-origin preflight with an empty body.
pub(crate) async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub(crate) async fn method_not_allowed(method: Method) -> ContactError {
    warn!(%method, "Rejected contact request method");
    ContactError::MethodNotAllowed { method: method.to_string().into(), context: None }
}

fn validate(form: ContactForm) -> Result<ContactSubmission, ContactError> {
    ContactSubmission::try_from(form).inspect_err(|e| warn!(error = %e, "Rejected submission"))
}

async fn deliver(contact: &Contact, submission: &ContactSubmission) -> Result<(), ContactError> {
    info!(
        user = configured(contact.identity.sender.is_some()),
        pass = configured(contact.credentials),
        "Email configured"
    );

    let message = OutboundMessage::compose(submission, &contact.identity);
    contact.mailer.send(&message).await.map_err(|source| {
        error!(error = %source, "Email error");
        ContactError::Delivery { source, context: None }
    })
}

const fn presence(value: Option<&str>) -> &'static str {
    match value {
        Some(v) if !v.is_empty() => "present",
        _ => "absent",
    }
}

const fn configured(set: bool) -> &'static str {
    if set { "set" } else { "not set" }
}
