use crate::constants::DEFAULT_SMTP_HOST;
use serde::Deserialize;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared across services.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub mail: MailConfig,
    pub site: SiteConfig,
    pub log: LogConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Log output of the server process.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directives (`info`, `folio=debug,tower_http=info`). `RUST_LOG` applies when unset.
    pub filter: Option<String>,
    pub json: bool,
    /// Rolling log files are written here when set.
    pub directory: Option<PathBuf>,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Transport security used for the SMTP connection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmtpSecurity {
    /// Implicit TLS (port 465).
    #[default]
    Tls,
    /// Plain connection upgraded with `STARTTLS` (port 587).
    StartTls,
    /// Unencrypted; only for local relays such as a development mail catcher.
    None,
}

/// Outbound mail account.
///
/// `user` is both the SMTP login and the sender address; `recipient` falls back
/// to `user` so messages land in the owner's own mailbox.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    pub host: String,
    pub port: Option<u16>,
    pub security: SmtpSecurity,
    pub user: Option<String>,
    pub password: Option<String>,
    pub recipient: Option<String>,
}

impl MailConfig {
    /// Both halves of the SMTP login are present and non-empty.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        is_set(self.user.as_deref()) && is_set(self.password.as_deref())
    }

    /// Address that receives forwarded messages.
    #[must_use]
    pub fn recipient(&self) -> Option<&str> {
        self.recipient.as_deref().filter(|r| !r.is_empty()).or(self.user.as_deref())
    }
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("security", &self.security)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("recipient", &self.recipient)
            .finish()
    }
}

/// Static assets of the single-page application.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory holding the built SPA (`index.html` and assets).
    pub static_dir: Option<PathBuf>,
}

fn is_set(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 3000, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SMTP_HOST.to_owned(),
            port: None,
            security: SmtpSecurity::default(),
            user: None,
            password: None,
            recipient: None,
        }
    }
}
