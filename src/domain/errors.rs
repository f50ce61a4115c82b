//! Domain errors. Used by ports and use cases.
//!
//! Avatar resolution has a single failure mode; adapters fold their
//! infrastructure errors (e.g. an unreadable directory) into it.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// No strategy could produce a URL for the user.
    #[error("chat: unable to resolve an avatar URL")]
    NoAvatarUrl,
}
