//! Application use cases. Orchestrate avatar sources via ports.

pub mod try_avatars;

pub use try_avatars::TryAvatars;
