use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::templates::SCRIPT;
use super::AppState;
use crate::entity::{Article, ArticleStats};
use crate::error::Result;

/// Shown in place of missing latest-article fields in `/stats`.
pub const NONE_SENTINEL: &str = "None";

#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub message: String,
    pub article: Article,
    pub saved_to_db: bool,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_articles: u64,
    pub total_words: u64,
    pub latest_article: String,
    pub latest_date: String,
}

impl From<ArticleStats> for StatsResponse {
    fn from(stats: ArticleStats) -> Self {
        let (latest_article, latest_date) = match stats.latest {
            Some(latest) => (latest.title, latest.created_at),
            None => (NONE_SENTINEL.to_string(), NONE_SENTINEL.to_string()),
        };
        Self {
            total_articles: stats.total_articles,
            total_words: stats.total_words,
            latest_article,
            latest_date,
        }
    }
}

/// User-facing failures are reported as 200 with an `error` field.
fn error_json(message: impl Into<String>) -> Response {
    Json(ErrorResponse {
        error: message.into(),
    })
    .into_response()
}

fn html_page(rendered: Result<String>) -> Response {
    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

pub async fn index(State(state): State<AppState>) -> Response {
    html_page(state.templates.generate_page(state.generator.is_live()))
}

pub async fn generate_article(
    State(state): State<AppState>,
    payload: std::result::Result<Json<GenerateRequest>, JsonRejection>,
) -> Response {
    let topic = match payload {
        Ok(Json(req)) => req.topic.trim().to_string(),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable generate request");
            String::new()
        }
    };

    if topic.is_empty() {
        return error_json("Please enter a topic");
    }

    tracing::info!(topic = %topic, "generating article");

    let draft = state.generator.draft_article(&topic).await;
    let mut article = Article::stamped_now(draft);

    let saved = state.store.lock().await.create(&mut article).is_ok();

    let message = if saved {
        format!("Generated comprehensive article about {}", topic)
    } else {
        "Generated article but failed to save to database".to_string()
    };

    Json(GenerateResponse {
        message,
        article,
        saved_to_db: saved,
    })
    .into_response()
}

pub async fn blog(State(state): State<AppState>) -> Response {
    let loaded = state.store.lock().await.list_all();
    let articles = loaded.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to load articles");
        Vec::new()
    });

    html_page(state.templates.blog_page(&articles))
}

pub async fn clear_articles(State(state): State<AppState>) -> Response {
    let cleared = state.store.lock().await.clear();
    match cleared {
        Ok(_) => Json(MessageResponse {
            message: "All articles cleared successfully from database".to_string(),
        })
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to clear articles");
            error_json(format!("Error clearing articles: {}", e))
        }
    }
}

pub async fn stats(State(state): State<AppState>) -> Response {
    let stats = state.store.lock().await.stats();
    match stats {
        Ok(stats) => Json(StatsResponse::from(stats)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to read stats");
            error_json(e.to_string())
        }
    }
}

pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SCRIPT,
    )
}
