use crate::error::CoreError;
use crate::error_utils::ErrorReporter;
use crate::types::{BoardTarget, Post};
use async_trait::async_trait;
use tracing::warn;

/// Anything that can list the current hot posts of a board.
#[async_trait]
pub trait BoardSource: Send + Sync {
    /// Fetches up to `limit` posts, surfacing any failure.
    async fn fetch_posts(&self, board: &BoardTarget, limit: u32) -> Result<Vec<Post>, CoreError>;

    /// Like [`BoardSource::fetch_posts`], but a board that cannot be read
    /// yields an empty list and a warning instead of an error.
    async fn fetch_top(&self, board: &BoardTarget, limit: u32) -> Vec<Post> {
        match self.fetch_posts(board, limit).await {
            Ok(posts) => posts,
            Err(e) => {
                warn!("Error scraping {}", board);
                ErrorReporter::new().report_warning(&e);
                Vec::new()
            }
        }
    }
}
