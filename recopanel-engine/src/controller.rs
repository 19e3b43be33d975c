use std::sync::Arc;

use recopanel_core::config::PanelConfig;
use recopanel_core::notification::{ActionNotification, TOGGLE_COMMAND};
use recopanel_core::types::{ButtonVariant, LogKind, ToggleState};
use serde_json::Value;

use crate::log_feed::LogFeed;
use crate::traits::{PanelSurface, Transport};

/// Gates user-initiated commands so that at most one is outstanding, and
/// presents the matching affordance for each state.
pub struct ToggleController {
    cfg: PanelConfig,
    state: ToggleState,
    transport: Arc<dyn Transport>,
}

impl ToggleController {
    pub fn new(
        cfg: PanelConfig,
        transport: Arc<dyn Transport>,
        surface: &mut dyn PanelSurface,
    ) -> Self {
        surface.set_button(&cfg.idle_label, ButtonVariant::Primary, true);
        Self {
            cfg,
            state: ToggleState::Idle,
            transport,
        }
    }

    /// There is no timeout: a lost notification leaves the controller Busy
    /// for good, and this accessor is how that shows up.
    pub fn state(&self) -> ToggleState {
        self.state
    }

    /// Issues the toggle command unless one is already outstanding.
    /// Returns whether a command was emitted.
    pub async fn activate(&mut self, surface: &mut dyn PanelSurface) -> anyhow::Result<bool> {
        if self.state == ToggleState::Busy {
            // Re-entrancy guard, not an error: the disabled affordance is the
            // only user-visible signal.
            log::debug!("activation ignored while busy");
            return Ok(false);
        }

        self.set_state(ToggleState::Busy);
        surface.set_button(&self.cfg.busy_label, ButtonVariant::Danger, false);

        // A failed emit keeps us Busy: there is no retry path, and the stuck
        // affordance is the anomaly signal (see `state`).
        self.transport.emit(TOGGLE_COMMAND).await?;
        Ok(true)
    }

    /// Handles one `action_log` notification: append a Success entry and
    /// restore the idle affordance. Resets unconditionally so a stray
    /// notification while already Idle recovers cleanly.
    pub fn on_completed(
        &mut self,
        surface: &mut dyn PanelSurface,
        feed: &mut LogFeed,
        payload: &Value,
    ) {
        let message = match ActionNotification::from_payload(payload) {
            Ok(notification) => notification.data,
            Err(e) => {
                log::warn!("malformed action_log payload: {e}");
                self.cfg.placeholder_message.clone()
            }
        };

        feed.append(surface, message, LogKind::Success);

        self.set_state(ToggleState::Idle);
        surface.set_button(&self.cfg.idle_label, ButtonVariant::Primary, true);
    }

    fn set_state(&mut self, next: ToggleState) {
        if self.state != next {
            log::info!("toggle state: {:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }
}
