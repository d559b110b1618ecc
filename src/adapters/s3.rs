use crate::config::AppConfig;
use crate::core::fetch::FetchService;
use crate::core::{GetObjectResponse, ObjectBody, ObjectStorageClient};
use crate::utils::error::ProviderError;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;

pub const NETWORKING_ERROR_CODE: &str = "NetworkingError";
pub const CONSTRUCTION_FAILURE_CODE: &str = "ConstructionFailure";
pub const BODY_READ_ERROR_CODE: &str = "BodyReadError";
pub const UNKNOWN_ERROR_CODE: &str = "Unknown";

pub type S3FetchService = FetchService<S3Client>;

impl FetchService<S3Client> {
    /// Builds an S3 client bound to the configured region. Credentials come
    /// from the SDK's default provider chain.
    pub async fn from_config(config: &AppConfig) -> Self {
        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let client = S3Client::from_conf(client_config(&sdk_config, &config.storage.region));

        tracing::info!(
            "Created S3 client for bucket '{}' in region '{}'",
            config.storage.bucket_name,
            config.storage.region
        );

        Self::new(client, &config.storage)
    }
}

pub fn client_config(sdk_config: &SdkConfig, region: &str) -> aws_sdk_s3::Config {
    aws_sdk_s3::config::Builder::from(sdk_config)
        .region(Region::new(region.to_string()))
        .build()
}

#[derive(Debug)]
pub struct S3Body(ByteStream);

impl ObjectBody for S3Body {
    async fn into_string(self) -> Result<String, ProviderError> {
        let data = self
            .0
            .collect()
            .await
            .map_err(|e| ProviderError::new(BODY_READ_ERROR_CODE, e.to_string()))?;

        String::from_utf8(data.into_bytes().to_vec()).map_err(|e| {
            ProviderError::new(
                BODY_READ_ERROR_CODE,
                format!("Response body is not valid UTF-8: {}", e),
            )
        })
    }
}

impl ObjectStorageClient for S3Client {
    type Body = S3Body;

    async fn get_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<GetObjectResponse<S3Body>, ProviderError> {
        // inherent `Client::get_object` builder, not this trait method
        let output = S3Client::get_object(self)
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(provider_error_from_sdk)?;

        Ok(GetObjectResponse::with_body(S3Body(output.body)))
    }
}

fn provider_error_from_sdk(err: SdkError<GetObjectError, HttpResponse>) -> ProviderError {
    let code = match &err {
        SdkError::ServiceError(context) => match context.err() {
            GetObjectError::NoSuchKey(_) => "NoSuchKey".to_string(),
            other => {
                service_error_code(other.code(), context.raw().status().as_u16()).to_string()
            }
        },
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) | SdkError::ResponseError(_) => {
            NETWORKING_ERROR_CODE.to_string()
        }
        SdkError::ConstructionFailure(_) => CONSTRUCTION_FAILURE_CODE.to_string(),
        _ => UNKNOWN_ERROR_CODE.to_string(),
    };

    ProviderError::new(code, DisplayErrorContext(&err).to_string())
}

/// Error code for a service error. Falls back on the HTTP status when the
/// response carried no code, e.g. bodiless 403 responses.
pub fn service_error_code(code: Option<&str>, status: u16) -> &str {
    match code {
        Some(code) if !code.is_empty() => code,
        _ => match status {
            403 => "Forbidden",
            // not a NoSuchKey/NoSuchBucket code, so it classifies as Internal
            404 => "NotFound",
            503 => "ServiceUnavailable",
            _ => UNKNOWN_ERROR_CODE,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fetch::classify_provider_error;
    use crate::utils::error::FetchError;

    #[test]
    fn test_service_error_code_prefers_declared_code() {
        assert_eq!(service_error_code(Some("NoSuchBucket"), 404), "NoSuchBucket");
        assert_eq!(service_error_code(Some("AccessDenied"), 403), "AccessDenied");
        assert_eq!(service_error_code(Some("SlowDown"), 503), "SlowDown");
    }

    #[test]
    fn test_service_error_code_falls_back_on_status() {
        assert_eq!(service_error_code(None, 403), "Forbidden");
        assert_eq!(service_error_code(Some(""), 503), "ServiceUnavailable");
        assert_eq!(service_error_code(None, 404), "NotFound");
        assert_eq!(service_error_code(None, 500), UNKNOWN_ERROR_CODE);
    }

    #[test]
    fn test_adapter_codes_classify_as_expected() {
        let err = ProviderError::new(NETWORKING_ERROR_CODE, "dispatch failure");
        assert!(matches!(
            classify_provider_error(&err),
            FetchError::ServiceUnavailable { .. }
        ));

        let err = ProviderError::new(service_error_code(None, 403), "forbidden");
        assert!(matches!(
            classify_provider_error(&err),
            FetchError::AuthenticationFailed { .. }
        ));

        let err = ProviderError::new(service_error_code(None, 404), "not found");
        assert!(matches!(
            classify_provider_error(&err),
            FetchError::Internal { .. }
        ));

        let err = ProviderError::new(BODY_READ_ERROR_CODE, "stream closed");
        assert!(matches!(
            classify_provider_error(&err),
            FetchError::Internal { .. }
        ));
    }

    #[test]
    fn test_client_config_binds_region() {
        let sdk_config = SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .build();

        let config = client_config(&sdk_config, "eu-west-1");

        assert_eq!(config.region(), Some(&Region::new("eu-west-1")));
    }

    #[tokio::test]
    async fn test_body_into_string() {
        let body = S3Body(ByteStream::from_static(b"Hello, World!"));
        assert_eq!(body.into_string().await.unwrap(), "Hello, World!");

        let body = S3Body(ByteStream::from_static(b""));
        assert_eq!(body.into_string().await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_body_rejects_invalid_utf8() {
        let body = S3Body(ByteStream::from_static(&[0xff, 0xfe, 0xfd]));

        let err = body.into_string().await.unwrap_err();
        assert_eq!(err.code, BODY_READ_ERROR_CODE);
    }
}
