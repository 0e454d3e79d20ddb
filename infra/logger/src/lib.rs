//! # Logger
//!
//! Installs the process-wide `tracing` subscriber: an [`EnvFilter`] (with
//! `RUST_LOG` taking precedence over the programmatic default), console
//! output in compact or JSON form, and optional rolling log files written
//! through a non-blocking worker.
//!
//! ## Example
//!
//! ```rust
//! # use folio_logger::{LevelFilter, Logger};
//! let _logger = Logger::builder()
//!     .name("folio")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Line format of every enabled output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Rolling file output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutput {
    directory: PathBuf,
    rotation: Rotation,
    max_files: usize,
}

impl FileOutput {
    /// Daily files in `directory`, keeping the last week.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self { directory: directory.into(), rotation: Rotation::DAILY, max_files: DEFAULT_MAX_FILES }
    }

    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }
}

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    level: LevelFilter,
    format: LogFormat,
    env_filter: Option<String>,
    file: Option<FileOutput>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            level: LevelFilter::INFO,
            format: LogFormat::Compact,
            env_filter: None,
            file: None,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// Configures the global subscriber. A name is required before [`init`](Self::init).
#[derive(Debug)]
#[must_use = "the builder does nothing until `init` is called"]
pub struct LoggerBuilder<N: Sealed = NoName> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Names the service; also the prefix of rolling log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { config: self.config, name: WithName(name.into()) }
    }
}

impl<N: Sealed> LoggerBuilder<N> {
    /// Default level when neither `RUST_LOG` nor [`env_filter`](Self::env_filter) is set.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Programmatic filter directives (e.g. `folio=debug,tower_http=info`).
    ///
    /// Invalid directives make [`LoggerBuilder::init`] fail.
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    pub const fn format(mut self, format: LogFormat) -> Self {
        self.config.format = format;
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    pub fn file(mut self, output: FileOutput) -> Self {
        self.config.file = Some(output);
        self
    }
}

impl LoggerBuilder<WithName> {
    /// Installs the subscriber for the rest of the process.
    ///
    /// Keep the returned [`Logger`] alive until shutdown: it owns the file
    /// writer's worker guard.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, a bad filter,
    ///   `max_files == 0` or no output at all.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] if the log directory
    ///   cannot be prepared.
    /// * [`LoggerError::Subscriber`] if a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { config, name: WithName(name) } = self;
        validate(&config, &name)?;

        let filter = env_filter(&config)?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if config.console {
            layers.push(match config.format {
                LogFormat::Compact => layer().compact().with_ansi(true).boxed(),
                LogFormat::Json => layer().json().boxed(),
            });
        }

        let guard = match &config.file {
            Some(output) => {
                let (file_layer, guard) = file_layer(&name, output, config.format)?;
                layers.push(file_layer);
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;

        tracing::debug!(
            service = %name,
            format = ?config.format,
            file = config.file.is_some(),
            "Logger initialized"
        );
        Ok(Logger { guard })
    }
}

fn file_layer(
    name: &str,
    output: &FileOutput,
    format: LogFormat,
) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    fs::create_dir_all(&output.directory)
        .context(format!("Creating {}", output.directory.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(output.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(output.max_files)
        .build(&output.directory)?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let base = layer().with_writer(writer).with_ansi(false);
    let boxed = match format {
        LogFormat::Compact => base.compact().boxed(),
        LogFormat::Json => base.json().boxed(),
    };
    Ok((boxed, guard))
}

fn validate(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    let problem = if name.trim().is_empty() {
        Some("logger name cannot be empty")
    } else if config.file.as_ref().is_some_and(|f| f.max_files == 0) {
        Some("max_files must be greater than zero")
    } else if !config.console && config.file.is_none() {
        Some("no output enabled; enable the console or a log file")
    } else {
        None
    };

    problem.map_or(Ok(()), |message| {
        Err(LoggerError::InvalidConfiguration { message: message.into(), context: None })
    })
}

fn env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    match &config.env_filter {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("invalid filter '{directives}': {e}").into(),
            context: None,
        }),
    }
}

/// Handle to the installed subscriber. Dropping it flushes pending file output.
#[must_use = "dropping the handle stops the log file writer"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName }
    }

    /// Whether a file writer is running.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logger shutting down, flushing log files");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder().name("folio").env_filter("folio=debug");

        assert!(builder.config.console);
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert_eq!(builder.config.format, LogFormat::Compact);
        assert_eq!(builder.config.env_filter.as_deref(), Some("folio=debug"));
        assert!(builder.config.file.is_none());
    }

    #[test]
    fn file_output_settings() {
        let output = FileOutput::new("logs").rotation(Rotation::HOURLY).max_files(3);
        let builder = Logger::builder().name("folio").file(output.clone());

        assert_eq!(builder.config.file, Some(output));
        assert_eq!(builder.config.file.as_ref().map(|f| f.max_files), Some(3));
    }

    #[test]
    fn invalid_settings_are_rejected_before_install() {
        let cases = [
            Logger::builder().name("  "),
            Logger::builder().name("folio").console(false),
            Logger::builder().name("folio").file(FileOutput::new("logs").max_files(0)),
            Logger::builder().name("folio").env_filter("folio=loud"),
        ];

        for builder in cases {
            let err = builder.init().expect_err("configuration must be rejected");
            assert!(matches!(err, LoggerError::InvalidConfiguration { .. }), "{err}");
        }
    }
}
