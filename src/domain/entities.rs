//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/session types here; the hosting chat server maps its own user
//! model onto [`ChatUser`].

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A chat participant as seen by avatar strategies.
///
/// Implementations must be immutable for the duration of a lookup.
pub trait ChatUser: Send + Sync {
    /// Stable per-user identifier used to correlate the user with a local file
    /// or an external avatar service.
    fn unique_id(&self) -> &str;

    /// Avatar URL already associated with the user's authenticated identity.
    /// `None` and `Some("")` both mean "nothing known".
    fn avatar_url(&self) -> Option<&str>;
}

/// Derives the hash-based unique ID for an e-mail address.
///
/// The address is trimmed and lowercased before hashing, so `" Foo@Bar.com"`
/// and `"foo@bar.com"` map to the same ID.
pub fn unique_id_for_email(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    hex::encode(hasher.finalize())
}

/// Concrete user record. What the chat server keeps after authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatProfile {
    pub unique_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl ChatProfile {
    pub fn new(unique_id: impl Into<String>) -> Self {
        Self {
            unique_id: unique_id.into(),
            ..Self::default()
        }
    }

    /// Builds a profile whose unique ID is the hash of `email`.
    pub fn from_email(email: impl Into<String>) -> Self {
        let email = email.into();
        Self {
            unique_id: unique_id_for_email(&email),
            email: Some(email),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }
}

impl ChatUser for ChatProfile {
    fn unique_id(&self) -> &str {
        &self.unique_id
    }

    fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }
}
