use crate::config::StorageConfig;
use crate::core::{ObjectBody, ObjectStorageClient};
use crate::utils::error::{FetchError, ProviderError};

pub const NOT_FOUND_MESSAGE: &str = "File or bucket not found";
pub const SERVICE_UNAVAILABLE_MESSAGE: &str = "S3 service is unavailable";
pub const ACCESS_DENIED_MESSAGE: &str = "Access denied";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected error occurred";
pub const NO_BODY_MESSAGE: &str = "No response body received";
pub const BODY_READ_MESSAGE: &str = "Failed to read response body";

/// Fetches one configured object and maps provider failures to [`FetchError`].
///
/// Holds no mutable state, so `fetch_object` can run concurrently from
/// several tasks as long as the client allows it.
#[derive(Debug, Clone)]
pub struct FetchService<C: ObjectStorageClient> {
    client: C,
    bucket_name: String,
    object_key: String,
}

impl<C: ObjectStorageClient> FetchService<C> {
    pub fn new(client: C, storage: &StorageConfig) -> Self {
        Self {
            client,
            bucket_name: storage.bucket_name.clone(),
            object_key: storage.object_key.clone(),
        }
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    pub fn object_key(&self) -> &str {
        &self.object_key
    }

    /// Issues exactly one get-object request and returns the body as text.
    ///
    /// No retry or timeout is applied here; callers that need a deadline
    /// should wrap the call themselves.
    pub async fn fetch_object(&self) -> Result<String, FetchError> {
        tracing::debug!(
            "Fetching object s3://{}/{}",
            self.bucket_name,
            self.object_key
        );

        let response = match self
            .client
            .get_object(&self.bucket_name, &self.object_key)
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("❌ S3 Error: code={}, message={}", err.code, err.message);
                return Err(classify_provider_error(&err));
            }
        };

        let Some(body) = response.body else {
            tracing::error!("❌ S3 Error: {}", NO_BODY_MESSAGE);
            return Err(FetchError::internal(NO_BODY_MESSAGE));
        };

        match body.into_string().await {
            Ok(content) => {
                tracing::debug!("Received {} bytes", content.len());
                Ok(content)
            }
            Err(err) => {
                // 讀取內容失敗一律歸為內部錯誤，不依 code 分類
                tracing::error!(
                    "❌ S3 body error: code={}, message={}",
                    err.code,
                    err.message
                );
                Err(FetchError::internal(BODY_READ_MESSAGE))
            }
        }
    }
}

/// Maps a provider error to a domain error by exact, case-sensitive match on
/// its code. The message text is never inspected.
pub fn classify_provider_error(err: &ProviderError) -> FetchError {
    match err.code.as_str() {
        "NoSuchKey" | "NoSuchBucket" => FetchError::not_found(NOT_FOUND_MESSAGE),
        "NetworkingError" | "ServiceUnavailable" => {
            FetchError::service_unavailable(SERVICE_UNAVAILABLE_MESSAGE)
        }
        "AccessDenied" | "Forbidden" => FetchError::authentication_failed(ACCESS_DENIED_MESSAGE),
        _ => FetchError::internal(UNEXPECTED_ERROR_MESSAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(code: &str) -> FetchError {
        classify_provider_error(&ProviderError::new(code, format!("Test {}", code)))
    }

    #[test]
    fn test_not_found_codes() {
        assert_eq!(classify("NoSuchKey"), FetchError::not_found(NOT_FOUND_MESSAGE));
        assert_eq!(classify("NoSuchBucket"), FetchError::not_found(NOT_FOUND_MESSAGE));
    }

    #[test]
    fn test_unavailable_codes() {
        for code in ["NetworkingError", "ServiceUnavailable"] {
            assert_eq!(
                classify(code),
                FetchError::service_unavailable(SERVICE_UNAVAILABLE_MESSAGE)
            );
        }
    }

    #[test]
    fn test_auth_codes() {
        for code in ["AccessDenied", "Forbidden"] {
            assert_eq!(
                classify(code),
                FetchError::authentication_failed(ACCESS_DENIED_MESSAGE)
            );
        }
    }

    #[test]
    fn test_unknown_codes_are_internal() {
        for code in ["UnknownError", "UnexpectedError", "", "SlowDown"] {
            assert_eq!(classify(code), FetchError::internal(UNEXPECTED_ERROR_MESSAGE));
        }
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert!(matches!(classify("nosuchkey"), FetchError::Internal { .. }));
        assert!(matches!(classify("ACCESSDENIED"), FetchError::Internal { .. }));
    }

    #[test]
    fn test_message_text_is_ignored() {
        let err = ProviderError::new("UnknownError", "NoSuchKey AccessDenied");
        assert!(matches!(
            classify_provider_error(&err),
            FetchError::Internal { .. }
        ));
    }
}
