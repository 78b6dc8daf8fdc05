//! Tera templates compiled into the binary.

use serde::Serialize;
use tera::{Context, Tera};

use super::markdown;
use crate::entity::Article;
use crate::error::{BlogError, Result};

const BASE: &str = include_str!("../../templates/base.html");
const GENERATE: &str = include_str!("../../templates/generate.html");
const BLOG: &str = include_str!("../../templates/blog.html");

/// Front-end script served at `/static/script.js`.
pub const SCRIPT: &str = include_str!("../../static/script.js");

pub struct Templates {
    tera: Tera,
}

/// What the blog template needs for one article.
#[derive(Debug, Serialize)]
struct ArticleView<'a> {
    id: Option<i64>,
    topic: &'a str,
    title: &'a str,
    summary: &'a str,
    tags: &'a [String],
    word_count: u64,
    created_at: String,
    content_html: String,
}

impl<'a> From<&'a Article> for ArticleView<'a> {
    fn from(article: &'a Article) -> Self {
        Self {
            id: article.id,
            topic: &article.draft.topic,
            title: &article.draft.title,
            summary: &article.draft.summary,
            tags: &article.draft.tags,
            word_count: article.draft.word_count,
            created_at: article.created_at.format("%B %-d, %Y at %H:%M UTC").to_string(),
            content_html: markdown::render(&article.draft.content),
        }
    }
}

impl Templates {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", BASE),
            ("generate.html", GENERATE),
            ("blog.html", BLOG),
        ])?;
        Ok(Self { tera })
    }

    /// The topic form. `live` says whether Gemini is configured.
    pub fn generate_page(&self, live: bool) -> Result<String> {
        let mut ctx = Context::new();
        ctx.insert("live", &live);
        Ok(self.tera.render("generate.html", &ctx)?)
    }

    pub fn blog_page(&self, articles: &[Article]) -> Result<String> {
        let views: Vec<ArticleView<'_>> = articles.iter().map(ArticleView::from).collect();
        let total_words: u64 = articles.iter().map(|a| a.draft.word_count).sum();

        let mut ctx = Context::new();
        ctx.insert("articles", &views);
        ctx.insert("total_words", &total_words);
        Ok(self.tera.render("blog.html", &ctx)?)
    }
}

impl From<tera::Error> for BlogError {
    fn from(e: tera::Error) -> Self {
        // Tera keeps the useful detail in the source chain.
        let mut message = e.to_string();
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = std::error::Error::source(cause);
        }
        BlogError::Template(message)
    }
}
