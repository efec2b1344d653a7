use super::{action::Action, command::Command, persistence};
use crate::domain::clipboard::Clipboard;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Executes a side-effecting command off the UI loop and posts the
/// outcome back as an action.
pub fn handle_command(
    command: Command,
    clipboard: Arc<dyn Clipboard>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::CopyToClipboard(text) => {
            tokio::spawn(async move {
                match clipboard.set_text(&text).await {
                    Ok(()) => {
                        tracing::debug!(bytes = text.len(), "clipboard write ok");
                        let _ = tx
                            .send(Action::CopyCompleted(Ok("Copied to clipboard".to_string())))
                            .await;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "clipboard write failed");
                        let _ = tx
                            .send(Action::CopyCompleted(Err(format!("Copy failed: {e:#}"))))
                            .await;
                    }
                }
            });
        }
        Command::SavePreferences(prefs) => {
            tokio::task::spawn_blocking(move || {
                persistence::save_preferences(&prefs);
            });
        }
    }
    Ok(())
}
