/// Successful response of a get-object request. The provider may omit the body.
#[derive(Debug)]
pub struct GetObjectResponse<B> {
    pub body: Option<B>,
}

impl<B> GetObjectResponse<B> {
    pub fn with_body(body: B) -> Self {
        Self { body: Some(body) }
    }

    pub fn empty() -> Self {
        Self { body: None }
    }
}
