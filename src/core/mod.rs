pub mod fetch;

pub use crate::domain::model::GetObjectResponse;
pub use crate::domain::ports::{ObjectBody, ObjectStorageClient};
pub use crate::utils::error::{FetchError, ProviderError};
