use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything produced by one analysis of a single article URL.
///
/// `text` holds the full extracted body and is only used to compute
/// sentiment; the interface never displays it directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleAnalysis {
    pub url: String,
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub summary: Option<String>,
    pub text: String,
    pub sentiment: Option<Sentiment>,
}

/// Continuous sentiment scores over the article body.
///
/// `polarity` is in [-1, 1], `subjectivity` in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl Sentiment {
    /// Classify polarity into a label. The ±0.1 boundaries are exclusive,
    /// so a polarity of exactly 0.1 is still Neutral.
    pub fn label(&self) -> SentimentLabel {
        if self.polarity > 0.1 {
            SentimentLabel::Positive
        } else if self.polarity < -0.1 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "😊",
            SentimentLabel::Negative => "😞",
            SentimentLabel::Neutral => "😐",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_classification() {
        let s = |polarity| Sentiment {
            polarity,
            subjectivity: 0.5,
        };
        assert_eq!(s(0.5).label(), SentimentLabel::Positive);
        assert_eq!(s(-0.5).label(), SentimentLabel::Negative);
        assert_eq!(s(0.05).label(), SentimentLabel::Neutral);
        assert_eq!(s(0.0).label(), SentimentLabel::Neutral);
    }

    #[test]
    fn test_label_boundaries_are_exclusive() {
        let s = |polarity| Sentiment {
            polarity,
            subjectivity: 0.0,
        };
        assert_eq!(s(0.1).label(), SentimentLabel::Neutral);
        assert_eq!(s(-0.1).label(), SentimentLabel::Neutral);
        assert_eq!(s(0.100001).label(), SentimentLabel::Positive);
        assert_eq!(s(-0.100001).label(), SentimentLabel::Negative);
    }
}
