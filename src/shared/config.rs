//! Application configuration. Avatar directory, served prefix, chain order.

use crate::adapters::avatar::{
    DEFAULT_AVATAR_DIR, DEFAULT_AVATAR_URL_PREFIX, DEFAULT_GRAVATAR_BASE_URL,
};
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

/// Chain order used when `strategies` is not configured.
pub const DEFAULT_STRATEGIES: &str = "auth,file_system,gravatar";

/// One entry of the configured avatar chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvatarKind {
    Auth,
    Gravatar,
    FileSystem,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown avatar strategy: {0:?} (expected auth, gravatar or file_system)")]
pub struct UnknownAvatarKind(pub String);

impl FromStr for AvatarKind {
    type Err = UnknownAvatarKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auth" => Ok(Self::Auth),
            "gravatar" => Ok(Self::Gravatar),
            "file_system" | "filesystem" | "fs" => Ok(Self::FileSystem),
            other => Err(UnknownAvatarKind(other.to_string())),
        }
    }
}

/// Parses a comma-separated chain order. Blank items are ignored.
pub fn parse_strategies(list: &str) -> Result<Vec<AvatarKind>, UnknownAvatarKind> {
    list.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(str::parse)
        .collect()
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory scanned for `<unique_id>*` files. Read from CHAT_AVATAR_AVATAR_DIR.
    #[serde(default)]
    pub avatar_dir: Option<String>,

    /// Path prefix for files served from the avatar directory. Read from CHAT_AVATAR_AVATAR_URL_PREFIX.
    #[serde(default)]
    pub avatar_url_prefix: Option<String>,

    /// Hash-based avatar service endpoint. Read from CHAT_AVATAR_GRAVATAR_BASE_URL.
    #[serde(default)]
    pub gravatar_base_url: Option<String>,

    /// Comma-separated chain order, e.g. "auth,gravatar". Read from CHAT_AVATAR_STRATEGIES.
    #[serde(default)]
    pub strategies: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("CHAT_AVATAR"));
        if let Ok(path) = std::env::var("CHAT_AVATAR_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the avatar directory. Defaults to "avatars" (relative to CWD).
    pub fn avatar_dir_or_default(&self) -> &str {
        self.avatar_dir.as_deref().unwrap_or(DEFAULT_AVATAR_DIR)
    }

    /// Returns the served path prefix. Defaults to "/avatars/".
    pub fn avatar_url_prefix_or_default(&self) -> &str {
        self.avatar_url_prefix
            .as_deref()
            .unwrap_or(DEFAULT_AVATAR_URL_PREFIX)
    }

    /// Returns the Gravatar endpoint. Defaults to "//www.gravatar.com/avatar/".
    pub fn gravatar_base_url_or_default(&self) -> &str {
        self.gravatar_base_url
            .as_deref()
            .unwrap_or(DEFAULT_GRAVATAR_BASE_URL)
    }

    /// Returns the parsed chain order. Defaults to auth, file system, Gravatar.
    pub fn strategies_or_default(&self) -> Result<Vec<AvatarKind>, UnknownAvatarKind> {
        parse_strategies(self.strategies.as_deref().unwrap_or(DEFAULT_STRATEGIES))
    }
}
