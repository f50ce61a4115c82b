pub mod banner;
pub mod prompt;

use crate::shared::config::AvatarKind;

/// Prints the welcome banner for the configured chain. Call once at startup,
/// after tracing init.
pub fn init_ui(kinds: &[AvatarKind]) {
    banner::print_welcome(kinds);
}
