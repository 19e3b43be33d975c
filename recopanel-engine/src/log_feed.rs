use recopanel_core::config::PanelConfig;
use recopanel_core::types::{LogEntry, LogKind};

use crate::traits::PanelSurface;

/// Owns the ordered activity log and projects every entry onto the surface.
/// Entries are never mutated or evicted; a long session simply accumulates.
pub struct LogFeed {
    // Newest first, matching the visible order.
    entries: Vec<LogEntry>,
}

impl LogFeed {
    /// Announces readiness with one Info entry before any command is issued.
    pub fn new(cfg: &PanelConfig, surface: &mut dyn PanelSurface) -> Self {
        let mut feed = Self { entries: Vec::new() };
        feed.append(surface, cfg.ready_message.clone(), LogKind::Info);
        feed
    }

    pub fn append(
        &mut self,
        surface: &mut dyn PanelSurface,
        message: impl Into<String>,
        kind: LogKind,
    ) {
        let entry = LogEntry::new(message, kind);
        surface.prepend_entry(&entry.render());
        self.entries.insert(0, entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }
}
