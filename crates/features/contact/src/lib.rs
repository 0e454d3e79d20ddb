//! Contact form slice.
//!
//! `POST /api/contact` validates `name`, `email` and `message`, forwards them
//! to the site owner by email, and answers with `{"success": true}` or an
//! error body. `OPTIONS` answers the browser's preflight, every other method
//! gets `405`. All responses carry the access-control headers from
//! [`folio_kernel::server::access`].
//!
//! ## Wiring
//! ```rust,ignore
//! let slice = folio_contact::init(&config.mail)?;
//! let state = ApiState::builder().config(config).register_slice(slice).build()?;
//! let app = folio_contact::router().with_state(state);
//! ```

mod error;
mod handler;
mod mailer;
mod model;

pub use crate::error::{
    ContactError, ContactErrorExt, ErrorResponse, METHOD_NOT_ALLOWED, MISSING_FIELDS, SEND_FAILED,
};
pub use crate::handler::SubmitResponse;
pub use crate::mailer::{MailError, MailErrorExt, Mailer, SmtpMailer, build_email};
pub use crate::model::{ContactForm, ContactSubmission, MailIdentity, OutboundMessage};

use axum::middleware::from_fn;
use axum::routing::options;
use folio_domain::config::MailConfig;
use folio_domain::constants::CONTACT_PATH;
use folio_kernel::domain::registry::InitializedSlice;
use folio_kernel::server::ApiState;
use folio_kernel::server::access::access_control;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Contact feature state, built once at startup.
#[folio_derive::folio_slice]
pub struct Contact {
    pub mailer: Arc<dyn Mailer>,
    pub identity: MailIdentity,
    /// Both SMTP user and password are configured.
    pub credentials: bool,
}

/// Initializes the slice with an SMTP mailer built from `config`.
///
/// # Errors
/// Returns [`MailError`] if the SMTP transport cannot be configured.
pub fn init(config: &MailConfig) -> Result<InitializedSlice, MailError> {
    let mailer = SmtpMailer::from_config(config)?;
    Ok(init_with_mailer(config, Arc::new(mailer)))
}

/// Initializes the slice with a caller-provided mailer.
pub fn init_with_mailer(config: &MailConfig, mailer: Arc<dyn Mailer>) -> InitializedSlice {
    let identity = MailIdentity::from_config(config);
    let credentials = config.has_credentials();

    tracing::info!(
        host = %config.host,
        sender = identity.sender.is_some(),
        credentials,
        "Contact slice initialized"
    );

    InitializedSlice::new(Contact::new(ContactInner { mailer, identity, credentials }))
}

/// Routes of the contact endpoint, wrapped in the access-control middleware.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(handler::submit_contact))
        .route(CONTACT_PATH, options(handler::preflight).fallback(handler::method_not_allowed))
        .layer(from_fn(access_control))
}
