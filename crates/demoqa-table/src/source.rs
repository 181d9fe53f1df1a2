use async_trait::async_trait;

use crate::Result;

/// Snapshot provider for the rendered table.
///
/// Implementations re-query the live widget on every call — the reader owns
/// no cached table model, so correctness only depends on each snapshot being
/// a consistent view of the DOM at the moment it was taken.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Current rendered rows, each as its cells' text in on-screen order.
    /// Structurally-present placeholder rows are included; the reader
    /// filters them with the data-bearing check.
    async fn rows(&self) -> Result<Vec<Vec<String>>>;
}
