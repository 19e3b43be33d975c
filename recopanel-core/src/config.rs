use serde::{Deserialize, Serialize};

/// User-facing strings of the panel. Defaults mirror the original control
/// panel; embeddings may override any of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    pub idle_label: String,
    pub busy_label: String,
    pub ready_message: String,

    // Shown in place of the action text when a notification arrives with a
    // malformed payload.
    #[serde(default = "default_placeholder_message")]
    pub placeholder_message: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            idle_label: "Start Recognition".into(),
            busy_label: "... recognition in progress ...".into(),
            ready_message: "Ready for recognition.".into(),
            placeholder_message: default_placeholder_message(),
        }
    }
}

fn default_placeholder_message() -> String {
    "(no action reported)".into()
}
