//! Kernel utilities shared across slices.
//! Keep this crate lightweight: configuration loading, the shared API state and
//! the HTTP plumbing every slice needs (system routes, access-control headers).
//!
//! ## Config loading
//! ```rust,no_run
//! use folio_kernel::config::ConfigLoader;
//! use folio_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = ConfigLoader::new().path("folio").load().unwrap_or_default();
//! ```
pub mod config;
pub mod prelude;
pub mod server;

pub use folio_domain as domain;
