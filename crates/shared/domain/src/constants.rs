//! Wire-level constants shared by the server and feature slices.

/// `OpenAPI` tag for infrastructure endpoints.
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag for the contact form endpoint.
pub const CONTACT_TAG: &str = "Contact";

/// Route of the contact form submission endpoint.
pub const CONTACT_PATH: &str = "/api/contact";

pub const ALLOW_CREDENTIALS: &str = "true";
pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "POST,OPTIONS";
pub const ALLOW_HEADERS: &str = "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, Content-MD5, Content-Type, Date, X-Api-Version";

/// Gmail SMTP relay, the default outbound mail host.
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Subject prefix of every forwarded contact message.
pub const SUBJECT_PREFIX: &str = "Portfolio Contact Form";
