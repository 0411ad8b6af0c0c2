//! The production analyzer: fetch, extract, summarize, score.

use async_trait::async_trait;
use nd_core::{ArticleAnalysis, ArticleAnalyzer, Error, Result};
use reqwest::Client;
use tracing::info;
use url::Url;

use crate::{extract, fetch};

/// Composes the whole analysis chain behind the [`ArticleAnalyzer`] seam:
/// one HTTP fetch, then pure extraction and text analysis.
pub struct Pipeline {
    client: Client,
}

impl Pipeline {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: fetch::build_client()?,
        })
    }
}

#[async_trait]
impl ArticleAnalyzer for Pipeline {
    async fn analyze(&self, url: &str) -> Result<ArticleAnalysis> {
        let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;
        let html = fetch::fetch_html(&self.client, &parsed).await?;
        let analysis = assemble(parsed.as_str(), &html);
        info!(
            url = parsed.as_str(),
            has_summary = analysis.summary.is_some(),
            "Article analysis complete"
        );
        Ok(analysis)
    }
}

/// Turn a fetched page into a full analysis. Pure; separated from
/// [`Pipeline::analyze`] so it can be exercised without a network.
fn assemble(url: &str, html: &str) -> ArticleAnalysis {
    let extracted = extract::extract_article(html);
    let summary = nd_analysis::summarize(&extracted.text);
    let sentiment = nd_analysis::score_sentiment(&extracted.text);

    ArticleAnalysis {
        url: url.to_string(),
        title: extracted.title,
        authors: extracted.authors,
        published_at: extracted.published_at,
        summary,
        text: extracted.text,
        sentiment,
    }
}
