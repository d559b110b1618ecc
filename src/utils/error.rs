use thiserror::Error;

/// Startup-time configuration failures. Fatal: the process should not proceed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {name}")]
    MissingVariable { name: String },

    #[error("Environment variable {name} is not valid UTF-8")]
    NotUnicode { name: String },

    #[error("PORT must be a valid number (got {value:?})")]
    InvalidPort { value: String },
}

/// Classified failures of a fetch, decoupled from the provider's vocabulary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Object not found: {message}")]
    NotFound { message: String },

    #[error("Storage service unavailable: {message}")]
    ServiceUnavailable { message: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl FetchError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            message: message.into(),
        }
    }

    pub fn authentication_failed(message: impl Into<String>) -> Self {
        Self::AuthenticationFailed {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message }
            | Self::ServiceUnavailable { message }
            | Self::AuthenticationFailed { message }
            | Self::Internal { message } => message,
        }
    }
}

/// Raw error reported by the object-storage client: its declared error
/// identifier plus a human-readable message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct ProviderError {
    pub code: String,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl AppError {
    /// 依錯誤種類決定程序退出碼，永不為 0
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(_) => 2,
            AppError::Fetch(FetchError::NotFound { .. }) => 3,
            AppError::Fetch(FetchError::ServiceUnavailable { .. }) => 4,
            AppError::Fetch(FetchError::AuthenticationFailed { .. }) => 5,
            AppError::Fetch(FetchError::Internal { .. }) => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::Config(e) => format!("Configuration problem: {}", e),
            AppError::Fetch(e) => format!("Error fetching S3 file: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::Config(ConfigError::MissingVariable { .. }) => {
                "Set the variable in the environment or in a .env file"
            }
            AppError::Config(ConfigError::NotUnicode { .. }) => {
                "Re-export the variable with a plain UTF-8 value"
            }
            AppError::Config(ConfigError::InvalidPort { .. }) => {
                "Set PORT to an integer such as 8080, or unset it to use the default"
            }
            AppError::Fetch(FetchError::NotFound { .. }) => {
                "Check S3_BUCKET_NAME and S3_FILE_NAME point at an existing object"
            }
            AppError::Fetch(FetchError::ServiceUnavailable { .. }) => {
                "Check network connectivity and try again later"
            }
            AppError::Fetch(FetchError::AuthenticationFailed { .. }) => {
                "Check the AWS credentials and the bucket policy"
            }
            AppError::Fetch(FetchError::Internal { .. }) => {
                "Re-run with --verbose and inspect the logged provider error"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
