use anyhow::Result;
use async_trait::async_trait;

/// Boundary to the host clipboard. The tour only ever writes; there is
/// no read-back and no retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn set_text(&self, text: &str) -> Result<()>;
}
