use super::traits::FormSubmitter;
use crate::{
    domain::{registration::entity::FormValues, shared::errors::DomainError},
    infrastructure::http::HttpFetcher,
};
use async_trait::async_trait;

/// POSTs the form values as JSON to a fixed endpoint.
pub struct HttpFormSubmitter {
    fetcher: HttpFetcher,
    url: String,
}

impl HttpFormSubmitter {
    pub fn new(fetcher: HttpFetcher, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
        }
    }
}

#[async_trait]
impl FormSubmitter for HttpFormSubmitter {
    async fn submit(&self, values: &FormValues) -> Result<(), DomainError> {
        self.fetcher.post_json(&self.url, values).await
    }
}
