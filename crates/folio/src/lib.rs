//! Facade crate for the portfolio backend.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it composes other crates, it does not implement behavior.
//!
//! ## Usage
//! Call [`init`] at startup and register the returned slices in
//! [`kernel::server::ApiState`]; mount [`server::router::api_router`].

pub use folio_contact as contact;
pub use folio_domain as domain;
pub use folio_kernel as kernel;
#[cfg(feature = "scroll")]
pub use folio_scroll as scroll;

use folio_contact::{MailError, Mailer};
use folio_domain::config::ApiConfig;
use folio_domain::registry::InitializedSlice;
use std::sync::Arc;

pub mod server {
    pub mod router {
        use folio_kernel::server::ApiState;
        pub use folio_kernel::server::router::system_router;
        use utoipa_axum::router::OpenApiRouter;

        /// Every HTTP route of the enabled features, plus the system routes.
        pub fn api_router() -> OpenApiRouter<ApiState> {
            system_router().merge(folio_contact::router())
        }
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features.
    pub const ENABLED: &[&str] = &[
        "contact",
        #[cfg(feature = "scroll")]
        "scroll",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initializes the server-side feature slices.
///
/// # Errors
/// Returns [`MailError`] if the SMTP transport cannot be configured.
pub fn init(config: &ApiConfig) -> Result<Vec<InitializedSlice>, MailError> {
    Ok(vec![contact::init(&config.mail)?])
}

/// Same as [`init`], delivering mail through `mailer` instead of SMTP.
pub fn init_with_mailer(config: &ApiConfig, mailer: Arc<dyn Mailer>) -> Vec<InitializedSlice> {
    vec![contact::init_with_mailer(&config.mail, mailer)]
}
