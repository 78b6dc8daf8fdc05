pub mod config;
pub mod demo;
pub mod gemini;

pub use config::GeneratorConfig;

use reqwest::Client;

use crate::entity::ArticleDraft;
use crate::parser;

/// Produces raw article text for a topic.
///
/// Calls Gemini when an API key is configured. Any failure along the way
/// (no key, transport error, bad status, unusable body) degrades to the demo
/// article, so `generate` always returns text.
pub struct ContentGenerator {
    config: GeneratorConfig,
    client: Client,
}

impl ContentGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Whether requests will go to Gemini rather than straight to demo content.
    pub fn is_live(&self) -> bool {
        self.config.has_api_key()
    }

    pub async fn generate(&self, topic: &str) -> String {
        let Some(api_key) = self.config.api_key() else {
            tracing::debug!(topic, "no API key configured, using demo content");
            return demo::build(topic);
        };

        match gemini::request_article(&self.client, &self.config, api_key, topic).await {
            Ok(text) => {
                tracing::info!(topic, chars = text.len(), "generated article with Gemini");
                text
            }
            Err(e) => {
                tracing::warn!(topic, error = %e, "AI generation failed, using demo content");
                demo::build(topic)
            }
        }
    }

    /// Generate text for `topic` and parse it into a draft.
    pub async fn draft_article(&self, topic: &str) -> ArticleDraft {
        let text = self.generate(topic).await;
        parser::parse(&text, topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};
    use axum::Router;

    /// Serve `body` with `status` for every request and return the base URL.
    async fn stub_gemini(status: StatusCode, body: &'static str) -> String {
        let app = Router::new().fallback(move || async move {
            (status, [(header::CONTENT_TYPE, "application/json")], body)
        });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn live_generator(api_base: String) -> ContentGenerator {
        ContentGenerator::new(GeneratorConfig {
            api_base,
            ..GeneratorConfig::demo().with_api_key("test-key")
        })
    }

    #[tokio::test]
    async fn test_live_response_is_parsed() {
        let base = stub_gemini(
            StatusCode::OK,
            r##"{"candidates": [{"content": {"parts": [{"text": "# Live Title\n\nshort live body"}]}}]}"##,
        )
        .await;
        let generator = live_generator(base);

        let draft = generator.draft_article("Rust").await;
        assert_eq!(draft.title, "Live Title");
        assert_eq!(draft.content, "# Live Title\n\nshort live body");
        assert_eq!(draft.word_count, 6);
        assert!(!draft.content.contains(demo::DEMO_NOTE));
    }

    #[tokio::test]
    async fn test_error_status_falls_back_to_demo() {
        let base = stub_gemini(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error": {"code": 500, "message": "internal"}}"#,
        )
        .await;
        let text = live_generator(base).generate("Rust").await;
        assert_eq!(text, demo::build("Rust"));
    }

    #[tokio::test]
    async fn test_non_json_body_falls_back_to_demo() {
        let base = stub_gemini(StatusCode::OK, "<html>gateway</html>").await;
        let text = live_generator(base).generate("Rust").await;
        assert_eq!(text, demo::build("Rust"));
    }

    #[tokio::test]
    async fn test_empty_candidates_fall_back_to_demo() {
        let base = stub_gemini(StatusCode::OK, r#"{"candidates": []}"#).await;
        let text = live_generator(base).generate("Rust").await;
        assert_eq!(text, demo::build("Rust"));
    }

    #[tokio::test]
    async fn test_without_key_returns_demo() {
        let generator = ContentGenerator::new(GeneratorConfig::demo());
        assert!(!generator.is_live());

        let text = generator.generate("Quantum Computing").await;
        assert_eq!(text, demo::build("Quantum Computing"));
    }

    #[tokio::test]
    async fn test_unreachable_service_falls_back_to_demo() {
        let config = GeneratorConfig {
            api_base: "http://127.0.0.1:1".to_string(),
            ..GeneratorConfig::demo().with_api_key("test-key")
        };
        let generator = ContentGenerator::new(config);
        assert!(generator.is_live());

        let text = generator.generate("Rust").await;
        assert!(text.contains(demo::DEMO_NOTE));
        assert!(text.contains("Rust"));
    }

    #[tokio::test]
    async fn test_draft_article_in_demo_mode() {
        let generator = ContentGenerator::new(GeneratorConfig::demo());
        let draft = generator.draft_article("Quantum Computing").await;

        assert_eq!(draft.topic, "Quantum Computing");
        assert_eq!(draft.title, "The Complete Guide to Quantum Computing");
        assert!(draft.content.contains(demo::DEMO_NOTE));
        assert_eq!(draft.word_count, draft.content.split_whitespace().count() as u64);
        assert_eq!(draft.tags[0], "quantum computing");
    }
}
