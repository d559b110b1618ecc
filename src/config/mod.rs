#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::ConfigError;
use crate::utils::validation::{
    parse_port, validate_non_empty_string, validate_required_var, Validate,
};
use serde::Serialize;
use std::env;
use std::ffi::OsString;

pub const DEFAULT_PORT: i64 = 8080;

pub const PORT_VAR: &str = "PORT";
pub const REGION_VAR: &str = "AWS_REGION";
pub const BUCKET_NAME_VAR: &str = "S3_BUCKET_NAME";
pub const OBJECT_KEY_VAR: &str = "S3_FILE_NAME";

/// Target object for the fetch service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageConfig {
    pub region: String,
    pub bucket_name: String,
    pub object_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    pub port: i64,
    pub storage: StorageConfig,
}

/// Reads the configuration from the process environment.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(|name| env::var_os(name))
}

/// Builds the configuration from an arbitrary variable lookup.
///
/// PORT is checked first, then the required variables in the order
/// AWS_REGION, S3_BUCKET_NAME, S3_FILE_NAME. The first violation wins.
/// Values that are set but not valid UTF-8 are reported, never treated as unset.
pub fn load_config_from<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<OsString>,
{
    let port = parse_port(lookup(PORT_VAR).as_deref(), DEFAULT_PORT)?;

    let region = validate_required_var(REGION_VAR, lookup(REGION_VAR))?;
    let bucket_name = validate_required_var(BUCKET_NAME_VAR, lookup(BUCKET_NAME_VAR))?;
    let object_key = validate_required_var(OBJECT_KEY_VAR, lookup(OBJECT_KEY_VAR))?;

    Ok(AppConfig {
        port,
        storage: StorageConfig {
            region,
            bucket_name,
            object_key,
        },
    })
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        validate_non_empty_string(REGION_VAR, &self.storage.region)?;
        validate_non_empty_string(BUCKET_NAME_VAR, &self.storage.bucket_name)?;
        validate_non_empty_string(OBJECT_KEY_VAR, &self.storage.object_key)?;

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}
