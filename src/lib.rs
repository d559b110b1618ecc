pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliArgs;

pub use crate::adapters::s3::S3FetchService;
pub use crate::config::{load_config, load_config_from, AppConfig, StorageConfig};
pub use crate::core::fetch::{classify_provider_error, FetchService};
pub use crate::utils::error::{AppError, ConfigError, FetchError, ProviderError, Result};
