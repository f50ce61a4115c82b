//! Outbound ports. Application calls into avatar sources.
//!
//! Implemented by adapters.

use crate::domain::{ChatUser, DomainError};

/// Avatar source. Resolves a displayable URL for a user.
///
/// Implementations are stateless: they must not mutate the user or any shared
/// state, and must not cache results between calls.
#[async_trait::async_trait]
pub trait Avatar: Send + Sync {
    /// Resolve the avatar URL for `user`.
    ///
    /// # Errors
    /// Returns [`DomainError::NoAvatarUrl`] when this source has nothing for the user.
    async fn get_avatar_url(&self, user: &dyn ChatUser) -> Result<String, DomainError>;
}
