use async_trait::async_trait;

use crate::types::ArticleAnalysis;
use crate::Result;

#[async_trait]
pub trait ArticleAnalyzer: Send + Sync {
    /// Fetch the article at `url` and produce a full analysis.
    ///
    /// The call may take seconds (network fetch, parsing) and fails for
    /// unreachable hosts, non-success responses, or pages with no
    /// extractable article content.
    async fn analyze(&self, url: &str) -> Result<ArticleAnalysis>;
}
