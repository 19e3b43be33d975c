use std::sync::{Arc, Mutex};
use std::time::Duration;

use recopanel_core::config::PanelConfig;
use recopanel_core::notification::{ACTION_LOG_EVENT, TOGGLE_COMMAND};
use recopanel_core::types::ButtonVariant;
use recopanel_engine::runtime::{InputEvent, Panel};
use recopanel_engine::traits::{PanelSurface, Transport};
use serde_json::{Value, json};
use tokio::sync::mpsc;

/// In-process stand-in for the real-time channel: commands go to the fake
/// recognizer task, notifications come back on the subscribed receiver.
struct LoopbackTransport {
    commands: mpsc::Sender<()>,
    notifications: Mutex<Option<mpsc::Receiver<Value>>>,
}

#[async_trait::async_trait]
impl Transport for LoopbackTransport {
    async fn emit(&self, event: &str) -> anyhow::Result<()> {
        anyhow::ensure!(event == TOGGLE_COMMAND, "unknown outbound event: {event}");
        self.commands.send(()).await?;
        Ok(())
    }

    async fn subscribe(&self, event: &str) -> anyhow::Result<mpsc::Receiver<Value>> {
        anyhow::ensure!(event == ACTION_LOG_EVENT, "unknown inbound event: {event}");
        self.notifications
            .lock()
            .unwrap()
            .take()
            .ok_or_else(|| anyhow::anyhow!("{event} already subscribed"))
    }
}

/// Mirrors the original recognizer: each toggle detects one action after a
/// short delay, reports it over `action_log`, then switches itself off.
fn spawn_fake_recognizer(mut commands: mpsc::Receiver<()>, notify: mpsc::Sender<Value>) {
    tokio::spawn(async move {
        let mut action = 0u32;
        while commands.recv().await.is_some() {
            tokio::time::sleep(Duration::from_millis(150)).await;
            action += 1;
            let payload = json!({ "data": format!("Action {action} detected") });
            if notify.send(payload).await.is_err() {
                break;
            }
        }
    });
}

struct StdoutSurface;

impl PanelSurface for StdoutSurface {
    fn set_button(&mut self, label: &str, variant: ButtonVariant, enabled: bool) {
        let interactivity = if enabled { "enabled" } else { "disabled" };
        println!("[button] {label:?} ({variant:?}, {interactivity})");
    }

    fn prepend_entry(&mut self, line: &str) {
        println!("[log]    {line}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Demo behavior: drive the panel through a scripted session against a
    // loopback recognizer, printing every affordance change and log entry.

    let (command_tx, command_rx) = mpsc::channel(16);
    let (notify_tx, notify_rx) = mpsc::channel(16);
    spawn_fake_recognizer(command_rx, notify_tx);

    let transport = Arc::new(LoopbackTransport {
        commands: command_tx,
        notifications: Mutex::new(Some(notify_rx)),
    });

    let mut surface = StdoutSurface;
    let panel = Panel::new(PanelConfig::default(), transport, &mut surface);

    let (input_tx, input_rx) = mpsc::channel(16);

    tokio::spawn(async move {
        // Pointer click starts a recognition pass.
        let _ = input_tx.send(InputEvent::PointerClick).await;

        // A second click while busy is swallowed by the guard.
        let _ = input_tx.send(InputEvent::PointerClick).await;

        tokio::time::sleep(Duration::from_millis(300)).await;

        // The spacebar converges on the same activation path.
        let _ = input_tx.send(InputEvent::KeyDown(" ".into())).await;

        // Any other key is ignored.
        let _ = input_tx.send(InputEvent::KeyDown("Enter".into())).await;

        tokio::time::sleep(Duration::from_millis(300)).await;
        // Dropping the sender ends the session.
    });

    let panel = panel.run(&mut surface, input_rx).await?;

    println!(
        "session over: state={:?}, {} log entries",
        panel.state(),
        panel.log().len()
    );

    Ok(())
}
