//! Structured metadata from JSON-LD blocks.
//!
//! News sites commonly embed a `NewsArticle` JSON-LD object carrying author
//! and publication-date metadata that is far more reliable than visible
//! bylines. Malformed blocks are skipped, never fatal.

use chrono::{DateTime, NaiveDate, Utc};
use scraper::{Html, Selector};
use serde_json::Value;

/// Extracts authors from JSON-LD metadata in the HTML document.
/// Handles the object, array, and plain-string forms of `author`.
pub fn extract_authors(document: &Html) -> Vec<String> {
    let mut authors = Vec::new();

    for json in jsonld_values(document) {
        if let Some(author) = json.get("author") {
            collect_author_names(author, &mut authors);
        }
    }

    // Preserve first-seen order while dropping duplicates.
    let mut seen = std::collections::HashSet::new();
    authors.retain(|a| seen.insert(a.clone()));
    authors
}

/// Extracts the publication timestamp from JSON-LD metadata.
pub fn extract_published_at(document: &Html) -> Option<DateTime<Utc>> {
    for json in jsonld_values(document) {
        for key in ["datePublished", "dateCreated"] {
            if let Some(date) = json.get(key).and_then(Value::as_str) {
                if let Some(parsed) = parse_date(date) {
                    return Some(parsed);
                }
            }
        }
    }
    None
}

/// Parse an article timestamp: RFC 3339 first, bare `YYYY-MM-DD` as a
/// midnight-UTC fallback.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn jsonld_values(document: &Html) -> Vec<Value> {
    let mut values = Vec::new();
    if let Ok(script_selector) = Selector::parse("script[type='application/ld+json']") {
        for script in document.select(&script_selector) {
            let raw = script.text().collect::<String>();
            if let Ok(json) = serde_json::from_str::<Value>(raw.trim()) {
                match json {
                    Value::Array(items) => values.extend(items),
                    other => values.push(other),
                }
            }
        }
    }
    values
}

fn collect_author_names(author: &Value, out: &mut Vec<String>) {
    match author {
        Value::Array(arr) => {
            for entry in arr {
                collect_author_names(entry, out);
            }
        }
        Value::Object(obj) => {
            if let Some(name) = obj.get("name").and_then(Value::as_str) {
                push_author(name, out);
            }
        }
        Value::String(s) => push_author(s, out),
        _ => {}
    }
}

fn push_author(name: &str, out: &mut Vec<String>) {
    let name = name.trim();
    if !name.is_empty() {
        out.push(name.to_string());
    }
}
