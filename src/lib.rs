//! chat-avatar: avatar URL resolution for chat users with Hexagonal Architecture.
//!
//! Sources are tried in order by [`usecases::TryAvatars`]; the first URL wins.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
