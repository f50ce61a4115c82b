//! Implements Avatar by scanning a local avatars directory.
//!
//! A file belongs to a user when its name matches the pattern `<id>*`
//! (`<id>.png`, `<id>.jpg`, ...). The ID is part of the pattern, so `?`, `[...]`
//! and `\` inside it keep their pattern meaning, and an ID that makes the
//! pattern malformed resolves to nothing. Entries are matched in file-name
//! order, so when several files match, the lexically smallest name wins.

use super::pattern::NamePattern;
use crate::domain::{ChatUser, DomainError};
use crate::ports::Avatar;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Directory scanned by default, relative to the process working directory.
pub const DEFAULT_AVATAR_DIR: &str = "avatars";

/// Path prefix under which the host serves files from the avatars directory.
pub const DEFAULT_AVATAR_URL_PREFIX: &str = "/avatars/";

/// Local avatars directory. Read-only; unreadable directories resolve to nothing.
#[derive(Debug, Clone)]
pub struct FileSystemAvatar {
    dir: PathBuf,
    url_prefix: String,
}

impl FileSystemAvatar {
    pub fn new() -> Self {
        Self::with_dir(DEFAULT_AVATAR_DIR)
    }

    pub fn with_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            url_prefix: DEFAULT_AVATAR_URL_PREFIX.to_string(),
        }
    }

    #[must_use]
    pub fn with_url_prefix(mut self, url_prefix: impl Into<String>) -> Self {
        self.url_prefix = url_prefix.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Non-directory entry names, sorted. Symlinks are not followed.
    async fn file_names(&self) -> std::io::Result<Vec<String>> {
        let mut entries = fs::read_dir(&self.dir).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let Ok(file_type) = entry.file_type().await else {
                continue;
            };
            if file_type.is_dir() {
                continue;
            }
            // Names that are not valid UTF-8 cannot be served as a URL path.
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        names.sort_unstable();
        Ok(names)
    }
}

impl Default for FileSystemAvatar {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Avatar for FileSystemAvatar {
    async fn get_avatar_url(&self, user: &dyn ChatUser) -> Result<String, DomainError> {
        let pattern = match NamePattern::new(&format!("{}*", user.unique_id())) {
            Ok(pattern) => pattern,
            Err(e) => {
                debug!(unique_id = user.unique_id(), error = %e, "unusable avatar pattern");
                return Err(DomainError::NoAvatarUrl);
            }
        };
        let names = match self.file_names().await {
            Ok(names) => names,
            Err(e) => {
                debug!(
                    dir = %self.dir.display(),
                    error = %e,
                    "avatars directory unreadable"
                );
                return Err(DomainError::NoAvatarUrl);
            }
        };
        names
            .into_iter()
            .find(|name| pattern.is_match(name))
            .map(|name| format!("{}{}", self.url_prefix, name))
            .ok_or(DomainError::NoAvatarUrl)
    }
}
