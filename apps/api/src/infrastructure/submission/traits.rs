use crate::domain::{registration::entity::FormValues, shared::errors::DomainError};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormSubmitter: Send + Sync {
    /// Delivers validated form values. The response body is not inspected.
    async fn submit(&self, values: &FormValues) -> Result<(), DomainError>;
}
