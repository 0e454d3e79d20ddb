use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Config file looked up when no path is given (any format `config` supports).
pub const DEFAULT_CONFIG_FILE: &str = "folio";

/// Prefix of structured environment overrides (`FOLIO__MAIL__HOST` → `mail.host`).
pub const ENV_PREFIX: &str = "FOLIO";

/// Plain secret variables understood by hosting platforms, mapped onto config keys.
pub const SECRET_ALIASES: &[(&str, &str)] =
    &[("EMAIL_USER", "mail.user"), ("EMAIL_PASS", "mail.password")];

/// Custom error type for config loading.
#[folio_derive::folio_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration loader.
///
/// Sources, lowest priority first:
/// 1. **File**: `folio.{toml,json,yaml,...}` or an explicit path. Optional unless
///    [`ConfigLoader::require_file`] is set.
/// 2. **Environment**: variables prefixed with `FOLIO__`, nested with `__`.
/// 3. **Secrets**: `EMAIL_USER` / `EMAIL_PASS`, see [`SECRET_ALIASES`].
///
/// The environment defaults to the process environment; tests inject a map with
/// [`ConfigLoader::env`] instead of mutating global state.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
    required: bool,
    env: Option<Map<String, String>>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the config file path (extension optional).
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Fails the load when the config file is missing.
    #[must_use]
    pub const fn require_file(mut self) -> Self {
        self.required = true;
        self
    }

    /// Replaces the process environment with the given variables.
    #[must_use]
    pub fn env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Builds the layered configuration and deserializes it into `T`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a required file is missing, a source is
    /// malformed, or the merged values do not match `T`.
    pub fn load<T>(self) -> Result<T, ConfigError>
    where
        T: DeserializeOwned,
    {
        let path = self.path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let env = self.env.unwrap_or_else(|| std::env::vars().collect());

        info!(path = %path.display(), required = self.required, "Loading config");

        let mut builder = Config::builder()
            .add_source(File::from(path.as_path()).required(self.required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .convert_case(config::Case::Snake)
                    .source(Some(env.clone())),
            );

        for (var, key) in SECRET_ALIASES {
            let value = env.get(*var).filter(|v| !v.is_empty()).cloned();
            if value.is_some() {
                debug!(var, key, "Applying secret override");
            }
            builder = builder
                .set_override_option(*key, value)
                .context(format!("Failed to apply {var}"))?;
        }

        builder
            .build()
            .context("Failed to build config")?
            .try_deserialize::<T>()
            .context("Failed to deserialize config")
    }
}

/// Loads configuration from `path` (or `folio`) plus the process environment.
///
/// # Errors
/// See [`ConfigLoader::load`].
///
/// # Example
/// ```rust
/// use folio_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let loader = ConfigLoader::new();
    match path {
        Some(path) => loader.path(path.as_ref()),
        None => loader,
    }
    .load()
}
