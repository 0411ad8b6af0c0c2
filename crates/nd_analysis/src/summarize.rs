//! Extractive summarization by word-frequency sentence scoring.
//!
//! Sentences are scored by the document-wide frequency of their non-stopword
//! tokens; the top sentences are emitted in original document order, so the
//! summary reads like a condensed version of the article rather than a
//! ranked list.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use tracing::debug;

use crate::text::{split_sentences, tokenize};

/// Number of sentences a summary keeps.
const SUMMARY_SENTENCES: usize = 5;

const STOPWORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as",
    "at", "be", "because", "been", "but", "by", "can", "could", "did", "do",
    "does", "for", "from", "had", "has", "have", "he", "her", "his", "how",
    "i", "if", "in", "into", "is", "it", "its", "just", "more", "most",
    "not", "of", "on", "or", "our", "over", "said", "she", "so", "some",
    "than", "that", "the", "their", "them", "then", "there", "these",
    "they", "this", "to", "up", "was", "we", "were", "what", "when",
    "which", "who", "will", "with", "would", "you",
];

lazy_static! {
    static ref STOPWORD_SET: HashSet<&'static str> = STOPWORDS.iter().copied().collect();
}

/// Produce an extractive summary of `text`, or `None` if there is nothing
/// to summarize.
pub fn summarize(text: &str) -> Option<String> {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return None;
    }
    if sentences.len() <= SUMMARY_SENTENCES {
        return Some(sentences.join(" "));
    }

    let frequencies = word_frequencies(text);

    let mut scored: Vec<(usize, f64)> = sentences
        .iter()
        .enumerate()
        .map(|(i, sentence)| (i, sentence_score(sentence, &frequencies)))
        .collect();

    // Highest score first; ties resolve to the earlier sentence.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    let mut picked: Vec<usize> = scored
        .into_iter()
        .take(SUMMARY_SENTENCES)
        .map(|(i, _)| i)
        .collect();
    picked.sort_unstable();

    debug!(
        total = sentences.len(),
        kept = picked.len(),
        "Selected summary sentences"
    );

    let summary = picked
        .into_iter()
        .map(|i| sentences[i].as_str())
        .collect::<Vec<_>>()
        .join(" ");
    Some(summary)
}

fn word_frequencies(text: &str) -> HashMap<String, f64> {
    let mut counts: HashMap<String, f64> = HashMap::new();
    for token in tokenize(text) {
        if STOPWORD_SET.contains(token.as_str()) || token.len() < 2 {
            continue;
        }
        *counts.entry(token).or_insert(0.0) += 1.0;
    }

    // Normalize against the most frequent word so scores stay comparable
    // across article lengths.
    let max = counts.values().cloned().fold(0.0_f64, f64::max);
    if max > 0.0 {
        for value in counts.values_mut() {
            *value /= max;
        }
    }
    counts
}

fn sentence_score(sentence: &str, frequencies: &HashMap<String, f64>) -> f64 {
    let tokens = tokenize(sentence);
    if tokens.is_empty() {
        return 0.0;
    }
    let total: f64 = tokens
        .iter()
        .filter_map(|t| frequencies.get(t.as_str()))
        .sum();
    total / tokens.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_empty_text() {
        assert!(summarize("").is_none());
        assert!(summarize("   ").is_none());
    }

    #[test]
    fn test_summarize_short_text_passes_through() {
        let text = "The council voted on Tuesday. The measure passed.";
        let summary = summarize(text).unwrap();
        assert_eq!(summary, "The council voted on Tuesday. The measure passed.");
    }

    #[test]
    fn test_summarize_limits_sentence_count() {
        let text = (1..=12)
            .map(|i| format!("Sentence number {} talks about the budget.", i))
            .collect::<Vec<_>>()
            .join(" ");
        let summary = summarize(&text).unwrap();
        let kept = summary.matches("Sentence number").count();
        assert_eq!(kept, 5);
    }

    #[test]
    fn test_summarize_prefers_topical_sentences() {
        let text = [
            "The flood damaged the flood barriers along the flood plain.",
            "Officials expect the flood cleanup to last weeks.",
            "Morning traffic moved slowly downtown yesterday.",
            "A bakery reopened near the train station.",
            "Local teams played friendly matches on Sunday.",
            "Mild weather is forecast for next weekend.",
            "Two museums extended their evening opening hours.",
        ]
        .join(" ");
        let summary = summarize(&text).unwrap();
        // "flood" dominates the frequency table, so both flood sentences
        // survive the cut while the weakest filler sentences drop out.
        assert!(summary.contains("flood barriers"));
        assert!(summary.contains("flood cleanup"));
    }

    #[test]
    fn test_summarize_preserves_document_order() {
        let text = (1..=10)
            .map(|i| format!("Report section {} covers the election results closely.", i))
            .collect::<Vec<_>>()
            .join(" ");
        let summary = summarize(&text).unwrap();
        let first = summary.find("section 1").or_else(|| summary.find("section"));
        assert!(first.is_some());
        // Picked sentences must appear in ascending document order.
        let positions: Vec<usize> = (1..=10)
            .filter_map(|i| summary.find(&format!("section {} ", i)))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }
}
