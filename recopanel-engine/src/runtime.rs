use std::sync::Arc;

use recopanel_core::config::PanelConfig;
use recopanel_core::input::{KeyDecision, dispatch_key};
use recopanel_core::notification::ACTION_LOG_EVENT;
use recopanel_core::types::{LogEntry, ToggleState};
use serde_json::Value;
use tokio::sync::mpsc;

use crate::controller::ToggleController;
use crate::log_feed::LogFeed;
use crate::traits::{PanelSurface, Transport};

/// A user gesture as delivered by the embedding's input adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    PointerClick,
    // The DOM-style key name of a page-global keydown.
    KeyDown(String),
}

/// The assembled control panel: controller plus log feed, constructed once
/// at session start and driven by the event loop in `run`.
pub struct Panel {
    controller: ToggleController,
    feed: LogFeed,
    transport: Arc<dyn Transport>,
}

impl Panel {
    pub fn new(
        cfg: PanelConfig,
        transport: Arc<dyn Transport>,
        surface: &mut dyn PanelSurface,
    ) -> Self {
        let feed = LogFeed::new(&cfg, surface);
        let controller = ToggleController::new(cfg, transport.clone(), surface);
        Self {
            controller,
            feed,
            transport,
        }
    }

    pub fn state(&self) -> ToggleState {
        self.controller.state()
    }

    pub fn log(&self) -> &[LogEntry] {
        self.feed.entries()
    }

    /// Both input adapters converge here, so exactly one code path owns the
    /// re-entrancy guard and the affordance transition.
    pub async fn handle_input(
        &mut self,
        surface: &mut dyn PanelSurface,
        event: InputEvent,
    ) -> anyhow::Result<()> {
        match event {
            InputEvent::PointerClick => {
                self.controller.activate(surface).await?;
            }
            InputEvent::KeyDown(key) => {
                if dispatch_key(&key) == KeyDecision::Activate {
                    self.controller.activate(surface).await?;
                }
            }
        }
        Ok(())
    }

    pub fn handle_notification(&mut self, surface: &mut dyn PanelSurface, payload: &Value) {
        self.controller
            .on_completed(surface, &mut self.feed, payload);
    }

    /// Single-task event loop: user gestures and server notifications
    /// interleave here, so the toggle state needs no lock. Returns when the
    /// input channel or the notification stream closes.
    pub async fn run(
        mut self,
        surface: &mut dyn PanelSurface,
        mut inputs: mpsc::Receiver<InputEvent>,
    ) -> anyhow::Result<Self> {
        let mut notifications = self.transport.subscribe(ACTION_LOG_EVENT).await?;

        loop {
            tokio::select! {
                maybe_input = inputs.recv() => match maybe_input {
                    Some(event) => {
                        // A failed emit leaves the panel Busy, the same
                        // observable condition as a lost notification; the
                        // session keeps running so a later `action_log` can
                        // still recover it.
                        if let Err(e) = self.handle_input(surface, event).await {
                            log::warn!("command emit failed: {e}");
                        }
                    }
                    None => break,
                },
                maybe_payload = notifications.recv() => match maybe_payload {
                    Some(payload) => self.handle_notification(surface, &payload),
                    None => break,
                },
            }
        }

        Ok(self)
    }
}
