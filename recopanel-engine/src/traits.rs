use async_trait::async_trait;
use recopanel_core::types::ButtonVariant;
use serde_json::Value;
use tokio::sync::mpsc;

/// The real-time channel to the recognition server, reduced to the two
/// operations the panel needs. Handshake, reconnection and framing are the
/// implementation's concern; delivery is trusted.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a named, zero-payload message to the server.
    async fn emit(&self, event: &str) -> anyhow::Result<()>;

    /// Yields the stream of payloads for a named inbound event.
    /// Each event may be subscribed once per session.
    async fn subscribe(&self, event: &str) -> anyhow::Result<mpsc::Receiver<Value>>;
}

/// The visible panel: one interactive button plus the activity log container.
/// Consumed, not owned — tests substitute a recording fake, the demo binary
/// a stdout printer.
pub trait PanelSurface: Send {
    /// Replaces the button's label, styling variant and interactivity.
    fn set_button(&mut self, label: &str, variant: ButtonVariant, enabled: bool);

    /// Inserts a rendered log line as the new first visible entry.
    fn prepend_entry(&mut self, line: &str);
}
