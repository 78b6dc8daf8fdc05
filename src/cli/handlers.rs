use std::net::{SocketAddr, ToSocketAddrs};
use std::path::Path;

use crate::entity::Article;
use crate::error::{BlogError, Result};
use crate::generator::{ContentGenerator, GeneratorConfig};
use crate::store::ArticleStore;
use crate::web::{self, AppState};

fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}

fn resolve_addr(host: &str, port: u16) -> Result<SocketAddr> {
    (host, port)
        .to_socket_addrs()?
        .next()
        .ok_or_else(|| {
            BlogError::Io(std::io::Error::new(
                std::io::ErrorKind::AddrNotAvailable,
                format!("could not resolve {}:{}", host, port),
            ))
        })
}

pub fn handle_serve(db: &Path, config: GeneratorConfig, host: &str, port: u16) -> Result<()> {
    let store = ArticleStore::open(db)?;
    let articles = store.count()?;
    tracing::info!(path = %db.display(), articles, "blog database initialized");

    if config.has_api_key() {
        tracing::info!(model = %config.model, "Gemini API key configured");
    } else {
        tracing::warn!("GEMINI_API_KEY not set, articles will use demo content");
    }

    let addr = resolve_addr(host, port)?;
    let state = AppState::new(store, ContentGenerator::new(config))?;

    runtime()?.block_on(web::serve(state, addr))
}

pub fn handle_generate(db: &Path, config: GeneratorConfig, topic: &str, json: bool) -> Result<()> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(BlogError::InvalidInput("Please enter a topic".to_string()));
    }

    let store = ArticleStore::open(db)?;
    let generator = ContentGenerator::new(config);

    let draft = runtime()?.block_on(generator.draft_article(topic));
    let mut article = Article::stamped_now(draft);
    let saved = store.create(&mut article).is_ok();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "article": article,
                "saved_to_db": saved,
            }))?
        );
    } else {
        match article.id {
            Some(id) => println!(
                "Created article {} - {} ({} words)",
                id, article.draft.title, article.draft.word_count
            ),
            None => println!(
                "Generated \"{}\" but failed to save it to the database",
                article.draft.title
            ),
        }
    }

    Ok(())
}

pub fn handle_list(db: &Path, json: bool) -> Result<()> {
    let store = ArticleStore::open(db)?;
    let articles = store.list_all()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&articles)?);
    } else if articles.is_empty() {
        println!("No articles found.");
    } else {
        println!("Articles:\n");
        for a in articles {
            println!(
                "  {:>4} [{}] {} ({} words)",
                a.id.unwrap_or_default(),
                a.created_at.format("%Y-%m-%d %H:%M"),
                a.draft.title,
                a.draft.word_count
            );
            if !a.draft.tags.is_empty() {
                println!("       tags: {}", a.draft.tags.join(", "));
            }
        }
    }

    Ok(())
}

pub fn handle_stats(db: &Path, json: bool) -> Result<()> {
    let store = ArticleStore::open(db)?;
    let stats = store.stats()?;

    if json {
        let response = web::handlers::StatsResponse::from(stats);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("Articles: {}", stats.total_articles);
        println!("Words:    {}", stats.total_words);
        if let Some(latest) = stats.latest {
            println!("Latest:   {} ({})", latest.title, latest.created_at);
        }
    }

    Ok(())
}

pub fn handle_clear(db: &Path) -> Result<()> {
    let store = ArticleStore::open(db)?;
    let removed = store.clear()?;
    println!("Cleared {} articles.", removed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_addr() {
        let addr = resolve_addr("127.0.0.1", 7000).unwrap();
        assert_eq!(addr.port(), 7000);
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn test_generate_rejects_blank_topic() {
        let tmp = tempfile::TempDir::new().unwrap();
        let db = tmp.path().join("blog.db");
        let err = handle_generate(&db, GeneratorConfig::demo(), "   ", false).unwrap_err();
        assert!(err.to_string().contains("Please enter a topic"));
        assert!(!db.exists());
    }
}
