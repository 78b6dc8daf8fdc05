use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::entity::{parse_timestamp, Article, ArticleDraft, ArticleStats, LatestArticle};
use crate::error::{BlogError, Result};

pub const DEFAULT_DB_FILE: &str = "blog_articles.db";

/// Compare timestamps by instant, not text, so RFC 3339 values and SQLite's
/// `CURRENT_TIMESTAMP` form interleave correctly.
const NEWEST_FIRST: &str = "julianday(created_at) DESC, id DESC";

/// SQLite-backed table of generated articles.
///
/// The store owns its connection. Callers that share it across requests wrap it
/// in a mutex, which is the only write serialization this layer relies on.
pub struct ArticleStore {
    conn: Connection,
    path: PathBuf,
}

impl ArticleStore {
    /// Open or create the article database
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        let store = Self {
            conn,
            path: path.to_path_buf(),
        };
        store.init()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the articles table exists. Safe to call on every start.
    pub fn init(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS articles (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                topic TEXT NOT NULL,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                summary TEXT,
                tags TEXT,
                word_count INTEGER,
                created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_articles_created_at ON articles(created_at)",
            [],
        )?;

        Ok(())
    }

    /// Insert one article and record the assigned id on it.
    pub fn create(&self, article: &mut Article) -> Result<i64> {
        let result = self.conn.query_row(
            "INSERT INTO articles (topic, title, content, summary, tags, word_count, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             RETURNING id",
            params![
                article.draft.topic,
                article.draft.title,
                article.draft.content,
                article.draft.summary,
                article.draft.joined_tags(),
                article.draft.word_count as i64,
                article.created_at_column(),
            ],
            |row| row.get::<_, i64>(0),
        );

        match result {
            Ok(id) => {
                article.id = Some(id);
                tracing::info!(id, title = %article.draft.title, "article saved");
                Ok(id)
            }
            Err(e) => {
                tracing::error!(error = %e, title = %article.draft.title, "failed to save article");
                Err(e.into())
            }
        }
    }

    /// Every stored article, newest first. Rows with an unreadable timestamp are skipped.
    pub fn list_all(&self) -> Result<Vec<Article>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT id, topic, title, content, summary, tags, word_count, created_at
             FROM articles
             ORDER BY {}",
            NEWEST_FIRST
        ))?;

        let articles: Vec<Article> = stmt
            .query_map([], row_to_article)?
            .collect::<std::result::Result<Vec<_>, _>>()?
            .into_iter()
            .flatten()
            .collect();

        tracing::debug!(count = articles.len(), "loaded articles");
        Ok(articles)
    }

    /// Delete every article in a single transaction. Returns the number of rows removed.
    pub fn clear(&self) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let removed = tx.execute("DELETE FROM articles", [])?;
        tx.commit()?;

        tracing::info!(removed, "cleared articles");
        Ok(removed)
    }

    pub fn count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM articles", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Aggregate totals plus the most recent article, if any.
    pub fn stats(&self) -> Result<ArticleStats> {
        let (total_articles, total_words): (i64, i64) = self.conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(word_count), 0) FROM articles",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        let latest = self
            .conn
            .query_row(
                &format!(
                    "SELECT title, created_at FROM articles ORDER BY {} LIMIT 1",
                    NEWEST_FIRST
                ),
                [],
                |row| {
                    Ok(LatestArticle {
                        title: row.get(0)?,
                        created_at: row.get(1)?,
                    })
                },
            )
            .optional()?;

        Ok(ArticleStats {
            total_articles: total_articles as u64,
            total_words: total_words as u64,
            latest,
        })
    }
}

/// `None` when the row's timestamp cannot be read.
fn row_to_article(row: &Row<'_>) -> rusqlite::Result<Option<Article>> {
    let id: i64 = row.get(0)?;
    let tags: Option<String> = row.get(5)?;
    let word_count: Option<i64> = row.get(6)?;
    let raw_created_at: String = row.get(7)?;

    let Some(created_at) = parse_timestamp(&raw_created_at) else {
        tracing::warn!(id, created_at = %raw_created_at, "skipping article with unreadable timestamp");
        return Ok(None);
    };

    Ok(Some(Article {
        id: Some(id),
        draft: ArticleDraft {
            topic: row.get(1)?,
            title: row.get(2)?,
            content: row.get(3)?,
            summary: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
            tags: ArticleDraft::split_tags(tags.as_deref()),
            word_count: word_count.unwrap_or(0).max(0) as u64,
        },
        created_at,
    }))
}

impl From<rusqlite::Error> for BlogError {
    fn from(e: rusqlite::Error) -> Self {
        BlogError::Storage(format!("SQLite error: {}", e))
    }
}
