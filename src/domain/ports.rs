use crate::domain::model::GetObjectResponse;
use crate::utils::error::ProviderError;
use std::future::Future;

/// Response payload that can be read to the end as text.
pub trait ObjectBody: Send {
    fn into_string(self) -> impl Future<Output = Result<String, ProviderError>> + Send;
}

/// Object-storage client the fetch service talks to. Implementations must be
/// safe to share across concurrent fetches.
pub trait ObjectStorageClient: Send + Sync {
    type Body: ObjectBody;

    fn get_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> impl Future<Output = Result<GetObjectResponse<Self::Body>, ProviderError>> + Send;
}
