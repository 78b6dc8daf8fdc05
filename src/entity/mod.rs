mod article;

pub use article::{Article, ArticleDraft, ArticleStats, LatestArticle, TAG_DELIMITER};
pub(crate) use article::parse_timestamp;
