//! Implements Avatar using Gravatar's URL convention.

use crate::domain::{ChatUser, DomainError};
use crate::ports::Avatar;

/// Protocol-relative Gravatar endpoint. The unique ID is appended verbatim.
pub const DEFAULT_GRAVATAR_BASE_URL: &str = "//www.gravatar.com/avatar/";

/// Derives `<base_url><unique_id>`. Never fails; the ID is not validated.
#[derive(Debug, Clone)]
pub struct GravatarAvatar {
    base_url: String,
}

impl GravatarAvatar {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_GRAVATAR_BASE_URL)
    }

    /// Use a different service host or path (e.g. a self-hosted Libravatar).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for GravatarAvatar {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Avatar for GravatarAvatar {
    async fn get_avatar_url(&self, user: &dyn ChatUser) -> Result<String, DomainError> {
        Ok(format!("{}{}", self.base_url, user.unique_id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChatProfile;

    #[tokio::test]
    async fn test_concatenates_unique_id() {
        let user = ChatProfile::new("abc123");
        let url = GravatarAvatar::new().get_avatar_url(&user).await.unwrap();
        assert_eq!(url, "//www.gravatar.com/avatar/abc123");
    }

    #[tokio::test]
    async fn test_accepts_any_identifier() {
        for id in ["", "not a hash", "ü/../?x=1"] {
            let user = ChatProfile::new(id);
            let url = GravatarAvatar::new().get_avatar_url(&user).await.unwrap();
            assert_eq!(url, format!("//www.gravatar.com/avatar/{id}"));
        }
    }

    #[tokio::test]
    async fn test_ignores_auth_url() {
        let user = ChatProfile::new("xyz").with_avatar_url("https://other/x.png");
        let url = GravatarAvatar::new().get_avatar_url(&user).await.unwrap();
        assert_eq!(url, "//www.gravatar.com/avatar/xyz");
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(GravatarAvatar::default().base_url(), DEFAULT_GRAVATAR_BASE_URL);
    }

    #[tokio::test]
    async fn test_custom_base_url() {
        let avatar = GravatarAvatar::with_base_url("https://seccdn.libravatar.org/avatar/");
        assert_eq!(avatar.base_url(), "https://seccdn.libravatar.org/avatar/");
        let user = ChatProfile::new("abc");
        assert_eq!(
            avatar.get_avatar_url(&user).await.unwrap(),
            "https://seccdn.libravatar.org/avatar/abc"
        );
    }
}
