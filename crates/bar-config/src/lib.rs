//! # bar-config: Startup Configuration
//!
//! Builds the backend [`Config`] from `.env` and `BAR_*` variables and
//! installs the tracing subscriber at the configured level.
//!
//! ## Startup Sequence
//! ```text
//! main()
//!   │
//!   ├─► Config::from_env()        .env + BAR_* → Config (or ConfigError)
//!   │
//!   ├─► logging::init(level)      RUST_LOG or BAR_LOG_LEVEL
//!   │
//!   ├─► info!(config.redacted())  secrets masked
//!   │
//!   └─► &Config handed to whatever needs it
//! ```
//!
//! ## Example
//! ```rust
//! use bar_config::{Config, LogLevel};
//!
//! let config = Config::from_lookup(|key| match key {
//!     "BAR_LOG_LEVEL" => Some("debug".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//!
//! assert_eq!(config.log_level, LogLevel::Debug);
//! assert_eq!(config.api.listen_addr(), "0.0.0.0:8080");
//! ```

pub mod config;
pub mod error;
pub mod logging;

pub use config::{ApiConfig, Config, LogLevel, MongoConfig, OauthConfig, StorageConfig};
pub use error::{ConfigError, ConfigResult};
