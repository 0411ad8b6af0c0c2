pub mod extract;
pub mod fetch;
pub mod jsonld;
pub mod pipeline;

pub use extract::{extract_article, ExtractedArticle};
pub use pipeline::Pipeline;

pub mod prelude {
    pub use super::pipeline::Pipeline;
    pub use nd_core::{ArticleAnalysis, ArticleAnalyzer, Error, Result};
}
