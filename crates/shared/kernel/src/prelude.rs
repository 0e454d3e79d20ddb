pub use crate::config::{ConfigError, ConfigLoader, load_config};
pub use crate::server::access::access_control;
pub use crate::server::{ApiState, ApiStateBuilder, ApiStateError};
pub use folio_domain::config::ApiConfig;
pub use folio_domain::registry::{FeatureSlice, InitializedSlice};
