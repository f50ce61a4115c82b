//! Inbound port. UI (adapter) calls into the application.

/// Input port: UI/CLI drives avatar lookups.
///
/// Prompt and terminal failures are not domain errors, so this port reports
/// them through `anyhow`.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive lookup loop until the user quits.
    async fn run(&self) -> anyhow::Result<()>;
}
