//! Article content extraction from raw HTML.

use chrono::{DateTime, Utc};
use scraper::{Html, Selector};
use tracing::debug;

use crate::jsonld;

/// Paragraphs shorter than this are treated as boilerplate (captions,
/// cookie banners, "related articles" stubs) and dropped from the body.
const MIN_PARAGRAPH_CHARS: usize = 30;

/// The raw fields pulled out of an article page, before summarization
/// and sentiment scoring.
#[derive(Debug, Clone, Default)]
pub struct ExtractedArticle {
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub text: String,
}

/// Extract title, byline metadata and body text from an HTML page.
///
/// Extraction never fails: a page with none of the expected structure
/// yields an `ExtractedArticle` with empty fields, which downstream
/// renders as placeholders.
pub fn extract_article(html: &str) -> ExtractedArticle {
    let document = Html::parse_document(html);

    let title = extract_title(&document);
    let authors = extract_authors(&document);
    let published_at = extract_published_at(&document);
    let text = extract_body(&document);

    debug!(
        has_title = title.is_some(),
        authors = authors.len(),
        has_date = published_at.is_some(),
        body_bytes = text.len(),
        "Extracted article fields"
    );

    ExtractedArticle {
        title,
        authors,
        published_at,
        text,
    }
}

fn extract_title(document: &Html) -> Option<String> {
    if let Some(og) = meta_content(document, "meta[property='og:title']") {
        return Some(og);
    }

    for selector in ["h1", "title"] {
        if let Ok(sel) = Selector::parse(selector) {
            if let Some(element) = document.select(&sel).next() {
                let text = element.text().collect::<String>().trim().to_string();
                if !text.is_empty() {
                    return Some(text);
                }
            }
        }
    }
    None
}

fn extract_authors(document: &Html) -> Vec<String> {
    let authors = jsonld::extract_authors(document);
    if !authors.is_empty() {
        return authors;
    }
    meta_content(document, "meta[name='author']")
        .map(|name| vec![name])
        .unwrap_or_default()
}

fn extract_published_at(document: &Html) -> Option<DateTime<Utc>> {
    jsonld::extract_published_at(document).or_else(|| {
        meta_content(document, "meta[property='article:published_time']")
            .and_then(|raw| jsonld::parse_date(&raw))
    })
}

fn extract_body(document: &Html) -> String {
    // Prefer paragraphs scoped to an <article> element; fall back to the
    // whole page when the site doesn't use one.
    for selector in ["article p", "p"] {
        if let Ok(sel) = Selector::parse(selector) {
            let paragraphs: Vec<String> = document
                .select(&sel)
                .map(|p| {
                    p.text()
                        .collect::<String>()
                        .split_whitespace()
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .filter(|p| p.len() >= MIN_PARAGRAPH_CHARS)
                .collect();
            if !paragraphs.is_empty() {
                return paragraphs.join("\n\n");
            }
        }
    }
    String::new()
}

fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    document
        .select(&sel)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}
