//! Implements InputPort. Inquire-based interactive lookups.

use crate::domain::ChatProfile;
use crate::ports::{Avatar, InputPort};
use async_trait::async_trait;
use inquire::{Confirm, Text};
use std::sync::Arc;
use tracing::info;

/// Builds the user to look up from what was typed. Anything with an `@` is
/// treated as an e-mail address and hashed into its unique ID.
pub fn profile_from_input(id_or_email: &str, auth_url: &str) -> ChatProfile {
    let id_or_email = id_or_email.trim();
    let profile = if id_or_email.contains('@') {
        ChatProfile::from_email(id_or_email)
    } else {
        ChatProfile::new(id_or_email)
    };
    match auth_url.trim() {
        "" => profile,
        url => profile.with_avatar_url(url),
    }
}

/// Prompt adapter. Asks for a user and prints the resolved avatar URL.
pub struct PromptInputPort {
    avatars: Arc<dyn Avatar>,
}

impl PromptInputPort {
    pub fn new(avatars: Arc<dyn Avatar>) -> Self {
        Self { avatars }
    }
}

#[async_trait]
impl InputPort for PromptInputPort {
    async fn run(&self) -> anyhow::Result<()> {
        loop {
            let id_or_email = Text::new("User ID or e-mail:")
                .with_help_message("e-mail addresses are hashed into their Gravatar ID")
                .prompt()?;
            let auth_url = Text::new("Auth-provided avatar URL (optional):").prompt()?;
            let profile = profile_from_input(&id_or_email, &auth_url);

            match self.avatars.get_avatar_url(&profile).await {
                Ok(url) => {
                    info!(unique_id = %profile.unique_id, url = %url, "avatar lookup");
                    println!("{url}");
                }
                Err(e) => println!("{e}"),
            }

            if !Confirm::new("Look up another user?")
                .with_default(true)
                .prompt()?
            {
                return Ok(());
            }
        }
    }
}
