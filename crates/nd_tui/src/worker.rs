//! Background dispatch of the blocking analysis call.

use std::sync::Arc;

use nd_core::{ArticleAnalysis, ArticleAnalyzer, Result};
use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

/// Events flowing from the worker task back to the interface loop.
#[derive(Debug)]
pub enum WorkerEvent {
    Finished(Result<ArticleAnalysis>),
}

/// Run one analysis on a fresh task and deliver the outcome over `tx`.
///
/// The worker owns no interface state: success and failure alike travel
/// through the single `Finished` message, sent exactly once, and the
/// interface loop restores the trigger when it arrives.
pub fn dispatch(
    analyzer: Arc<dyn ArticleAnalyzer>,
    url: String,
    tx: UnboundedSender<WorkerEvent>,
) {
    tokio::spawn(async move {
        let outcome = analyzer.analyze(&url).await;
        if tx.send(WorkerEvent::Finished(outcome)).is_err() {
            warn!(%url, "Interface loop closed before the result was delivered");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use nd_core::Error;
    use tokio::sync::mpsc;

    struct MockAnalyzer {
        fail: bool,
    }

    #[async_trait]
    impl ArticleAnalyzer for MockAnalyzer {
        async fn analyze(&self, url: &str) -> Result<ArticleAnalysis> {
            if self.fail {
                return Err(Error::Fetch("connection timed out".to_string()));
            }
            Ok(ArticleAnalysis {
                url: url.to_string(),
                title: Some("Test Article".to_string()),
                authors: vec!["Test Author".to_string()],
                published_at: None,
                summary: Some("Test summary".to_string()),
                text: "Test content".to_string(),
                sentiment: None,
            })
        }
    }

    #[tokio::test]
    async fn test_dispatch_delivers_success() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let analyzer: Arc<dyn ArticleAnalyzer> = Arc::new(MockAnalyzer { fail: false });

        dispatch(analyzer, "https://news.example/a1".to_string(), tx);

        let WorkerEvent::Finished(outcome) = rx.recv().await.unwrap();
        let analysis = outcome.unwrap();
        assert_eq!(analysis.url, "https://news.example/a1");
        assert_eq!(analysis.title.as_deref(), Some("Test Article"));
    }

    #[tokio::test]
    async fn test_dispatch_delivers_failure_exactly_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let analyzer: Arc<dyn ArticleAnalyzer> = Arc::new(MockAnalyzer { fail: true });

        dispatch(analyzer, "https://news.example/a1".to_string(), tx);

        let WorkerEvent::Finished(outcome) = rx.recv().await.unwrap();
        assert!(outcome.is_err());
        // The channel carries one message per dispatch, never two.
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_full_cycle_against_app_state() {
        use crate::app::App;

        let (tx, mut rx) = mpsc::unbounded_channel();
        let analyzer: Arc<dyn ArticleAnalyzer> = Arc::new(MockAnalyzer { fail: false });

        let mut app = App::with_input("news.example/a1");
        let url = app.submit().unwrap();
        assert_eq!(url, "https://news.example/a1");
        assert!(!app.trigger_enabled());

        dispatch(analyzer, url, tx);
        let WorkerEvent::Finished(outcome) = rx.recv().await.unwrap();
        app.finish(outcome);

        assert!(app.trigger_enabled());
        assert_eq!(app.fields.title, "Test Article");
        assert_eq!(app.fields.summary, "Test summary");
    }
}
