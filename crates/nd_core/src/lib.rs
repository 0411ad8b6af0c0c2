pub mod analyzer;
pub mod error;
pub mod types;

pub use analyzer::ArticleAnalyzer;
pub use error::Error;
pub use types::{ArticleAnalysis, Sentiment, SentimentLabel};

pub type Result<T> = std::result::Result<T, Error>;
