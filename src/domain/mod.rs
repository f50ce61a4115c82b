//! Core domain layer. No external I/O dependencies.
//!
//! The user entity and the single avatar error live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{ChatProfile, ChatUser, unique_id_for_email};
pub use errors::DomainError;
