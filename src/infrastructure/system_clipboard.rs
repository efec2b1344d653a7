use crate::domain::clipboard::Clipboard;
use anyhow::{Context, Result};
use async_trait::async_trait;

/// `arboard`-backed clipboard. The platform call blocks, so it runs on
/// a blocking task; a fresh handle per write keeps the type `Sync`.
pub struct SystemClipboard;

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn set_text(&self, text: &str) -> Result<()> {
        let text = text.to_owned();
        tokio::task::spawn_blocking(move || {
            let mut clipboard =
                arboard::Clipboard::new().context("clipboard unavailable")?;
            clipboard
                .set_text(text)
                .context("clipboard write rejected")?;
            Ok(())
        })
        .await?
    }
}
