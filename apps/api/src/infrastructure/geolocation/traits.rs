use crate::domain::{location::entity::Coordinate, shared::errors::DomainError};
use async_trait::async_trait;

/// Device positioning capability.
///
/// Fails with [`DomainError::PermissionDenied`] when the user refused access and
/// [`DomainError::PositionUnavailable`] when no fix could be obtained.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PositionSource: Send + Sync {
    async fn current_position(&self) -> Result<Coordinate, DomainError>;
}
