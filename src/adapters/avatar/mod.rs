//! Avatar sources. Each implements the Avatar port.

pub mod auth;
pub mod file_system;
pub mod gravatar;
pub mod pattern;

pub use auth::AuthAvatar;
pub use file_system::{DEFAULT_AVATAR_DIR, DEFAULT_AVATAR_URL_PREFIX, FileSystemAvatar};
pub use gravatar::{DEFAULT_GRAVATAR_BASE_URL, GravatarAvatar};

use crate::ports::Avatar;
use crate::shared::config::{AppConfig, AvatarKind};
use crate::usecases::TryAvatars;
use std::sync::Arc;

/// Builds a chain in the order given by `kinds`, using configured paths and hosts.
pub fn build_chain(kinds: &[AvatarKind], cfg: &AppConfig) -> TryAvatars {
    kinds
        .iter()
        .map(|kind| -> Arc<dyn Avatar> {
            match kind {
                AvatarKind::Auth => Arc::new(AuthAvatar::new()),
                AvatarKind::Gravatar => {
                    Arc::new(GravatarAvatar::with_base_url(cfg.gravatar_base_url_or_default()))
                }
                AvatarKind::FileSystem => Arc::new(
                    FileSystemAvatar::with_dir(cfg.avatar_dir_or_default())
                        .with_url_prefix(cfg.avatar_url_prefix_or_default()),
                ),
            }
        })
        .collect()
}
