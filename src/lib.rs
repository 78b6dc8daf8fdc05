pub mod cli;
pub mod entity;
pub mod error;
pub mod generator;
pub mod parser;
pub mod store;
pub mod web;

pub use entity::{Article, ArticleDraft, ArticleStats};
pub use error::{BlogError, Result};
pub use generator::{ContentGenerator, GeneratorConfig};
pub use store::ArticleStore;
