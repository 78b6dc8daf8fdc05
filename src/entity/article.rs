use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Separator used when tags are stored as a single column.
pub const TAG_DELIMITER: char = ',';

/// Article fields derived from generated text, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub topic: String,
    pub title: String,
    pub content: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub word_count: u64,
}

impl ArticleDraft {
    /// Tags as they are written to the `tags` column.
    pub fn joined_tags(&self) -> String {
        self.tags.join(&TAG_DELIMITER.to_string())
    }

    /// Inverse of [`ArticleDraft::joined_tags`]. NULL and empty columns yield no tags.
    pub fn split_tags(column: Option<&str>) -> Vec<String> {
        match column {
            Some(s) if !s.is_empty() => s.split(TAG_DELIMITER).map(str::to_string).collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub draft: ArticleDraft,
    pub created_at: DateTime<Utc>,
}

impl Article {
    /// Wrap a draft with a creation time. The id stays empty until the store writes it.
    pub fn new(draft: ArticleDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            draft,
            // The column keeps microseconds, so drop anything finer up front.
            created_at: created_at.trunc_subsecs(6),
        }
    }

    pub fn stamped_now(draft: ArticleDraft) -> Self {
        Self::new(draft, Utc::now())
    }

    /// Fixed-width RFC 3339 with microseconds, as stored in the `created_at` column.
    pub fn created_at_column(&self) -> String {
        format_timestamp(&self.created_at)
    }
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored timestamp. Accepts our RFC 3339 form and SQLite's `CURRENT_TIMESTAMP` form.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

/// The most recently created article, as reported by stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LatestArticle {
    pub title: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleStats {
    pub total_articles: u64,
    pub total_words: u64,
    pub latest: Option<LatestArticle>,
}
