//! HTML download for article pages.

use std::time::Duration;

use nd_core::{Error, Result};
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

const USER_AGENT: &str = concat!("nd/", env!("CARGO_PKG_VERSION"));

/// Upper bound on one fetch. A hung host fails the dispatch instead of
/// pinning a worker forever.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the shared HTTP client used for every fetch.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()?;
    Ok(client)
}

/// Download the page at `url` and return its body as text.
pub async fn fetch_html(client: &Client, url: &Url) -> Result<String> {
    debug!(%url, "Fetching article page");
    let response = client.get(url.as_str()).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Fetch(format!(
            "request for {} failed with status {}",
            url, status
        )));
    }

    let body = response.text().await?;
    info!(%url, bytes = body.len(), "Fetched article page");
    Ok(body)
}
