//! Ordered fallback over avatar sources.
//!
//! Each source is asked in turn; the first URL wins and later sources are not
//! consulted. Individual failures are not reported, only the blanket one.

use crate::domain::{ChatUser, DomainError};
use crate::ports::Avatar;
use std::sync::Arc;
use tracing::debug;

/// Chain of avatar sources. Earlier entries take priority.
#[derive(Clone, Default)]
pub struct TryAvatars {
    avatars: Vec<Arc<dyn Avatar>>,
}

impl TryAvatars {
    pub fn new(avatars: Vec<Arc<dyn Avatar>>) -> Self {
        Self { avatars }
    }

    /// Append a source with the lowest priority so far.
    pub fn push(&mut self, avatar: Arc<dyn Avatar>) {
        self.avatars.push(avatar);
    }

    pub fn len(&self) -> usize {
        self.avatars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.avatars.is_empty()
    }
}

impl FromIterator<Arc<dyn Avatar>> for TryAvatars {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Avatar>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl std::fmt::Debug for TryAvatars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryAvatars")
            .field("len", &self.avatars.len())
            .finish()
    }
}

#[async_trait::async_trait]
impl Avatar for TryAvatars {
    async fn get_avatar_url(&self, user: &dyn ChatUser) -> Result<String, DomainError> {
        for (position, avatar) in self.avatars.iter().enumerate() {
            if let Ok(url) = avatar.get_avatar_url(user).await {
                debug!(unique_id = user.unique_id(), position, "avatar resolved");
                return Ok(url);
            }
        }
        Err(DomainError::NoAvatarUrl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::avatar::{AuthAvatar, FileSystemAvatar, GravatarAvatar};
    use crate::domain::ChatProfile;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls and returns a fixed outcome.
    struct Probe {
        calls: AtomicUsize,
        url: Option<&'static str>,
    }

    impl Probe {
        fn new(url: Option<&'static str>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                url,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl Avatar for Probe {
        async fn get_avatar_url(&self, _user: &dyn ChatUser) -> Result<String, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.url.map(str::to_string).ok_or(DomainError::NoAvatarUrl)
        }
    }

    #[tokio::test]
    async fn test_empty_chain_fails() {
        let chain = TryAvatars::default();
        assert!(chain.is_empty());
        assert_eq!(
            chain.get_avatar_url(&ChatProfile::new("xyz")).await,
            Err(DomainError::NoAvatarUrl)
        );
    }

    #[tokio::test]
    async fn test_falls_through_to_gravatar() {
        let chain = TryAvatars::new(vec![
            Arc::new(AuthAvatar::new()),
            Arc::new(GravatarAvatar::new()),
        ]);
        let url = chain
            .get_avatar_url(&ChatProfile::new("xyz"))
            .await
            .unwrap();
        assert_eq!(url, "//www.gravatar.com/avatar/xyz");
    }

    #[tokio::test]
    async fn test_earlier_entry_wins() {
        let chain = TryAvatars::new(vec![
            Arc::new(AuthAvatar::new()),
            Arc::new(GravatarAvatar::new()),
        ]);
        let user = ChatProfile::new("xyz").with_avatar_url("https://idp/me.png");
        assert_eq!(
            chain.get_avatar_url(&user).await.unwrap(),
            "https://idp/me.png"
        );
    }

    #[tokio::test]
    async fn test_short_circuits_after_first_success() {
        let first = Probe::new(None);
        let second = Probe::new(Some("/two"));
        let third = Probe::new(Some("/three"));
        let chain: TryAvatars = [
            first.clone() as Arc<dyn Avatar>,
            second.clone() as Arc<dyn Avatar>,
            third.clone() as Arc<dyn Avatar>,
        ]
        .into_iter()
        .collect();

        let url = chain.get_avatar_url(&ChatProfile::new("u")).await.unwrap();
        assert_eq!(url, "/two");
        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 1);
        assert_eq!(third.calls(), 0);
    }

    #[tokio::test]
    async fn test_all_failing_reports_blanket_error() {
        let a = Probe::new(None);
        let b = Probe::new(None);
        let mut chain = TryAvatars::default();
        chain.push(a.clone());
        chain.push(b.clone());

        assert_eq!(
            chain.get_avatar_url(&ChatProfile::new("u")).await,
            Err(DomainError::NoAvatarUrl)
        );
        assert_eq!(a.calls() + b.calls(), 2);
    }

    #[tokio::test]
    async fn test_does_not_cache_between_calls() {
        let probe = Probe::new(Some("/p"));
        let chain = TryAvatars::new(vec![probe.clone() as Arc<dyn Avatar>]);
        let user = ChatProfile::new("u");
        chain.get_avatar_url(&user).await.unwrap();
        chain.get_avatar_url(&user).await.unwrap();
        assert_eq!(probe.calls(), 2);
    }

    #[tokio::test]
    async fn test_chains_nest() {
        let inner = TryAvatars::new(vec![Arc::new(AuthAvatar::new())]);
        let outer = TryAvatars::new(vec![
            Arc::new(inner),
            Arc::new(FileSystemAvatar::with_dir("/definitely/not/here")),
            Arc::new(GravatarAvatar::new()),
        ]);
        assert_eq!(outer.len(), 3);
        assert_eq!(
            outer.get_avatar_url(&ChatProfile::new("n")).await.unwrap(),
            "//www.gravatar.com/avatar/n"
        );
    }
}
