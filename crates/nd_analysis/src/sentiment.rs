//! Lexicon-based sentiment scoring.
//!
//! Polarity and subjectivity are the means of the per-word scores of every
//! lexicon word found in the text. A negator within the two tokens before a
//! scored word flips and dampens its polarity; an intensifier amplifies it.
//! Text with no lexicon hits scores (0.0, 0.0); empty text is "unavailable"
//! and scores as `None`.

use std::collections::HashMap;

use lazy_static::lazy_static;
use nd_core::Sentiment;
use tracing::debug;

use crate::text::tokenize;

/// (word, polarity in [-1, 1], subjectivity in [0, 1])
const LEXICON: &[(&str, f64, f64)] = &[
    ("abysmal", -1.0, 1.0),
    ("accident", -0.4, 0.4),
    ("admirable", 0.8, 0.9),
    ("afraid", -0.6, 0.9),
    ("aggressive", -0.3, 0.7),
    ("alarming", -0.6, 0.8),
    ("amazing", 0.8, 0.9),
    ("angry", -0.6, 0.9),
    ("appalling", -0.9, 0.9),
    ("attack", -0.5, 0.5),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.7),
    ("beautiful", 0.85, 1.0),
    ("benefit", 0.5, 0.4),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("bleak", -0.6, 0.7),
    ("blame", -0.4, 0.6),
    ("boom", 0.5, 0.5),
    ("breakthrough", 0.7, 0.6),
    ("brilliant", 0.9, 0.9),
    ("broken", -0.4, 0.5),
    ("brutal", -0.8, 0.9),
    ("calm", 0.3, 0.4),
    ("catastrophe", -0.9, 0.8),
    ("catastrophic", -0.9, 0.9),
    ("celebrate", 0.6, 0.6),
    ("chaos", -0.6, 0.7),
    ("cheerful", 0.6, 0.8),
    ("collapse", -0.6, 0.5),
    ("comfortable", 0.5, 0.7),
    ("concern", -0.3, 0.5),
    ("confident", 0.5, 0.7),
    ("conflict", -0.4, 0.5),
    ("corrupt", -0.8, 0.8),
    ("crash", -0.6, 0.5),
    ("crisis", -0.6, 0.6),
    ("critical", -0.4, 0.7),
    ("cruel", -0.8, 0.9),
    ("damage", -0.5, 0.5),
    ("danger", -0.6, 0.6),
    ("dangerous", -0.6, 0.7),
    ("dead", -0.6, 0.5),
    ("deadly", -0.8, 0.7),
    ("death", -0.6, 0.4),
    ("decline", -0.3, 0.4),
    ("defeat", -0.5, 0.5),
    ("delight", 0.8, 0.9),
    ("destroy", -0.7, 0.6),
    ("destruction", -0.7, 0.6),
    ("devastating", -0.9, 0.9),
    ("disaster", -0.8, 0.7),
    ("disastrous", -0.9, 0.9),
    ("dismal", -0.7, 0.8),
    ("disappointing", -0.6, 0.8),
    ("dreadful", -0.9, 1.0),
    ("effective", 0.5, 0.6),
    ("efficient", 0.5, 0.6),
    ("emergency", -0.5, 0.5),
    ("encouraging", 0.6, 0.7),
    ("enjoy", 0.5, 0.6),
    ("excellent", 1.0, 1.0),
    ("exciting", 0.6, 0.8),
    ("fail", -0.5, 0.5),
    ("failure", -0.6, 0.6),
    ("fair", 0.4, 0.6),
    ("fantastic", 0.9, 0.9),
    ("fear", -0.6, 0.7),
    ("flourish", 0.6, 0.6),
    ("fortunate", 0.7, 0.8),
    ("fraud", -0.7, 0.7),
    ("friendly", 0.5, 0.6),
    ("gain", 0.4, 0.4),
    ("generous", 0.6, 0.7),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("grim", -0.6, 0.7),
    ("growth", 0.4, 0.3),
    ("happy", 0.8, 1.0),
    ("harm", -0.5, 0.5),
    ("harmful", -0.6, 0.6),
    ("hate", -0.8, 0.9),
    ("healthy", 0.5, 0.5),
    ("hope", 0.4, 0.5),
    ("hopeful", 0.5, 0.7),
    ("horrible", -1.0, 1.0),
    ("horrific", -1.0, 1.0),
    ("hostile", -0.6, 0.8),
    ("impressive", 0.7, 0.8),
    ("improve", 0.4, 0.4),
    ("improvement", 0.4, 0.4),
    ("injure", -0.5, 0.5),
    ("innovative", 0.5, 0.6),
    ("inspiring", 0.7, 0.8),
    ("kill", -0.7, 0.6),
    ("lose", -0.4, 0.4),
    ("loss", -0.4, 0.4),
    ("love", 0.5, 0.6),
    ("lucky", 0.7, 0.8),
    ("miserable", -0.8, 0.9),
    ("mistake", -0.4, 0.5),
    ("murder", -0.8, 0.7),
    ("nice", 0.6, 0.9),
    ("optimistic", 0.6, 0.8),
    ("outstanding", 0.9, 0.9),
    ("panic", -0.6, 0.7),
    ("peace", 0.5, 0.4),
    ("peaceful", 0.6, 0.6),
    ("perfect", 1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("positive", 0.3, 0.5),
    ("problem", -0.3, 0.4),
    ("progress", 0.4, 0.4),
    ("promising", 0.6, 0.7),
    ("prosper", 0.6, 0.6),
    ("protect", 0.3, 0.3),
    ("proud", 0.6, 0.8),
    ("recover", 0.4, 0.4),
    ("recovery", 0.4, 0.4),
    ("relief", 0.4, 0.5),
    ("remarkable", 0.75, 0.75),
    ("rescue", 0.4, 0.4),
    ("risk", -0.3, 0.4),
    ("ruin", -0.7, 0.7),
    ("sad", -0.5, 1.0),
    ("safe", 0.5, 0.5),
    ("scandal", -0.6, 0.7),
    ("severe", -0.5, 0.6),
    ("shocking", -0.6, 0.8),
    ("strong", 0.4, 0.5),
    ("stunning", 0.7, 0.9),
    ("succeed", 0.6, 0.6),
    ("success", 0.6, 0.6),
    ("successful", 0.7, 0.7),
    ("suffer", -0.6, 0.6),
    ("support", 0.3, 0.3),
    ("terrible", -1.0, 1.0),
    ("terrific", 0.8, 0.9),
    ("terror", -0.8, 0.8),
    ("threat", -0.5, 0.5),
    ("thrive", 0.6, 0.6),
    ("tragedy", -0.8, 0.7),
    ("tragic", -0.8, 0.8),
    ("trouble", -0.4, 0.5),
    ("unfortunate", -0.6, 0.8),
    ("unhappy", -0.6, 0.9),
    ("unsafe", -0.5, 0.5),
    ("victory", 0.6, 0.5),
    ("violence", -0.7, 0.6),
    ("violent", -0.7, 0.7),
    ("vital", 0.4, 0.5),
    ("warning", -0.3, 0.4),
    ("weak", -0.4, 0.6),
    ("welcome", 0.5, 0.5),
    ("win", 0.5, 0.4),
    ("wonderful", 1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.6),
];

const NEGATORS: &[&str] = &["not", "no", "never", "cannot", "hardly", "without"];

const INTENSIFIERS: &[&str] = &["very", "really", "extremely", "highly", "deeply"];

/// How many tokens a negator or intensifier reaches forward.
const MODIFIER_WINDOW: usize = 2;

/// Polarity multiplier applied under negation ("not good" reads mildly
/// negative rather than fully inverted).
const NEGATION_FACTOR: f64 = -0.5;

const INTENSIFIER_FACTOR: f64 = 1.3;

lazy_static! {
    static ref LEXICON_MAP: HashMap<&'static str, (f64, f64)> = LEXICON
        .iter()
        .map(|(word, polarity, subjectivity)| (*word, (*polarity, *subjectivity)))
        .collect();
}

/// Score `text`, or return `None` when there is no text to score.
pub fn score_sentiment(text: &str) -> Option<Sentiment> {
    if text.trim().is_empty() {
        return None;
    }

    let mut polarities = Vec::new();
    let mut subjectivities = Vec::new();
    let mut negation_left = 0usize;
    let mut intensity_left = 0usize;

    for token in tokenize(text) {
        if NEGATORS.contains(&token.as_str()) || token.ends_with("n't") {
            negation_left = MODIFIER_WINDOW + 1;
        } else if INTENSIFIERS.contains(&token.as_str()) {
            intensity_left = MODIFIER_WINDOW + 1;
        } else if let Some(&(polarity, subjectivity)) = LEXICON_MAP.get(token.as_str()) {
            let mut polarity = polarity;
            if intensity_left > 0 {
                polarity = (polarity * INTENSIFIER_FACTOR).clamp(-1.0, 1.0);
            }
            if negation_left > 0 {
                polarity *= NEGATION_FACTOR;
            }
            polarities.push(polarity);
            subjectivities.push(subjectivity);
            negation_left = 0;
            intensity_left = 0;
        }
        negation_left = negation_left.saturating_sub(1);
        intensity_left = intensity_left.saturating_sub(1);
    }

    if polarities.is_empty() {
        return Some(Sentiment {
            polarity: 0.0,
            subjectivity: 0.0,
        });
    }

    let polarity = polarities.iter().sum::<f64>() / polarities.len() as f64;
    let subjectivity = subjectivities.iter().sum::<f64>() / subjectivities.len() as f64;
    debug!(
        hits = polarities.len(),
        polarity, subjectivity, "Scored sentiment"
    );

    Some(Sentiment {
        polarity,
        subjectivity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nd_core::SentimentLabel;

    #[test]
    fn test_empty_text_is_unavailable() {
        assert!(score_sentiment("").is_none());
        assert!(score_sentiment("  \n\t ").is_none());
    }

    #[test]
    fn test_no_lexicon_hits_is_neutral_zero() {
        let s = score_sentiment("The committee convened on Tuesday afternoon.").unwrap();
        assert_eq!(s.polarity, 0.0);
        assert_eq!(s.subjectivity, 0.0);
        assert_eq!(s.label(), SentimentLabel::Neutral);
    }

    #[test]
    fn test_negative_news_text() {
        let s = score_sentiment(
            "The storm was a disaster for the coast. Residents called the damage terrible.",
        )
        .unwrap();
        assert!(s.polarity < -0.1);
        assert_eq!(s.label(), SentimentLabel::Negative);
        assert!(s.subjectivity > 0.0);
    }

    #[test]
    fn test_positive_text() {
        let s = score_sentiment("A wonderful breakthrough and a great success for the team.")
            .unwrap();
        assert!(s.polarity > 0.1);
        assert_eq!(s.label(), SentimentLabel::Positive);
    }

    #[test]
    fn test_negation_dampens_and_flips() {
        let plain = score_sentiment("The plan is good.").unwrap();
        let negated = score_sentiment("The plan is not good.").unwrap();
        assert!(plain.polarity > 0.0);
        assert!(negated.polarity < 0.0);
        assert!(negated.polarity.abs() < plain.polarity.abs());
    }

    #[test]
    fn test_intensifier_amplifies() {
        let plain = score_sentiment("The result was good.").unwrap();
        let intense = score_sentiment("The result was very good.").unwrap();
        assert!(intense.polarity > plain.polarity);
    }

    #[test]
    fn test_scores_stay_in_range() {
        let s = score_sentiment(
            "Very excellent, extremely wonderful, really perfect and deeply horrible chaos.",
        )
        .unwrap();
        assert!((-1.0..=1.0).contains(&s.polarity));
        assert!((0.0..=1.0).contains(&s.subjectivity));
    }
}
