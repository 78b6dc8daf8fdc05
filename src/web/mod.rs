//! HTTP surface: the generation form, the blog view, and the JSON endpoints.

pub mod handlers;
pub mod markdown;
pub mod templates;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::generator::ContentGenerator;
use crate::store::ArticleStore;
use templates::Templates;

/// Shared state handed to every handler.
///
/// The store sits behind a mutex so concurrent requests take turns on the
/// single SQLite connection. The lock is never held across the AI call.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<ArticleStore>>,
    pub generator: Arc<ContentGenerator>,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(store: ArticleStore, generator: ContentGenerator) -> Result<Self> {
        Ok(Self {
            store: Arc::new(Mutex::new(store)),
            generator: Arc::new(generator),
            templates: Arc::new(Templates::new()?),
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/generate_article", post(handlers::generate_article))
        .route("/blog", get(handlers::blog))
        .route("/clear_articles", post(handlers::clear_articles))
        .route("/stats", get(handlers::stats))
        .route("/static/script.js", get(handlers::script))
        .with_state(state)
}

/// Serve until Ctrl-C.
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
