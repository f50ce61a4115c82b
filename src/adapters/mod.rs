//! Infrastructure adapters. Implement ports.
//!
//! Avatar sources (auth provider, Gravatar, local directory) and the prompt UI.

pub mod avatar;
pub mod ui;
