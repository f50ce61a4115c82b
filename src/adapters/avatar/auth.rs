//! Implements Avatar using the URL the auth provider attached to the user.

use crate::domain::{ChatUser, DomainError};
use crate::ports::Avatar;
use tracing::trace;

/// Returns the user's pre-associated avatar URL unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthAvatar;

impl AuthAvatar {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Avatar for AuthAvatar {
    async fn get_avatar_url(&self, user: &dyn ChatUser) -> Result<String, DomainError> {
        match user.avatar_url() {
            Some(url) if !url.is_empty() => Ok(url.to_string()),
            _ => {
                trace!(unique_id = user.unique_id(), "no auth-provided avatar URL");
                Err(DomainError::NoAvatarUrl)
            }
        }
    }
}
