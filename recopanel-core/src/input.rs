/// Decision for a page-global keydown: only the spacebar drives the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDecision {
    Activate,
    Ignore,
}

impl KeyDecision {
    /// On a match the embedding must swallow the key's default effect
    /// (space would otherwise scroll the page). Every other key keeps its
    /// default behavior.
    pub fn suppresses_default(self) -> bool {
        matches!(self, Self::Activate)
    }
}

/// Maps a DOM-style key name to a dispatch decision. Both spellings the
/// browsers use for the spacebar are recognized.
pub fn dispatch_key(key: &str) -> KeyDecision {
    match key {
        " " | "Spacebar" => KeyDecision::Activate,
        _ => KeyDecision::Ignore,
    }
}
