use chrono::{DateTime, Local};

/// Gate for the command channel: at most one command may be outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Idle,
    Busy,
}

impl Default for ToggleState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Idle vs. busy styling of the toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Info,
    Success,
}

impl LogKind {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Info => "ℹ️",
        }
    }
}

/// One timestamped record in the activity log. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub message: String,
    pub kind: LogKind,
    pub timestamp: DateTime<Local>,
}

impl LogEntry {
    /// Stamps the entry with the wall-clock time at creation.
    pub fn new(message: impl Into<String>, kind: LogKind) -> Self {
        Self {
            message: message.into(),
            kind,
            timestamp: Local::now(),
        }
    }

    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }

    pub fn render(&self) -> String {
        format!("{} [{}] {}", self.kind.icon(), self.time_label(), self.message)
    }
}
