//! Minimal client for the Gemini `generateContent` REST call.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::config::GeneratorConfig;
use crate::error::{BlogError, Result};

#[derive(Debug, Serialize)]
pub(crate) struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

impl GenerateContentRequest {
    pub(crate) fn from_prompt(prompt: String) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate. Blank output is an error.
    pub(crate) fn into_text(self) -> Result<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(BlogError::Generation("response contained no text".to_string()));
        }
        Ok(text)
    }
}

/// Instructions sent to the model for `topic`.
pub fn build_prompt(topic: &str) -> String {
    format!(
        r#"Write a comprehensive, in-depth blog article about: {topic}

Format the article in Markdown. Put the title on the very first line as a level-one heading (# Title).

Structure the article with these sections:

## Introduction
- Open with a compelling hook
- Explain why the topic matters
- Give context and background

## Main Body (3-5 sections)
- Break the topic into logical sections with subheadings
- Include practical examples and use cases
- Add data, statistics, or research findings where relevant

## Key Features and Components
- Explain the important aspects
- Compare approaches where it helps
- Include best practices

## Real-World Applications
- Show how the topic is used in industry
- Include case studies or success stories
- Give practical implementation tips

## Future Trends
- Discuss emerging developments
- Outline opportunities and challenges

## Conclusion
- Summarize the key takeaways
- Give actionable advice

Requirements:
- At least 800 words
- Professional, engaging tone
- Specific examples
- Clear section structure"#,
        topic = topic
    )
}

/// Send one `generateContent` request and return the article text.
pub(crate) async fn request_article(
    client: &Client,
    config: &GeneratorConfig,
    api_key: &str,
    topic: &str,
) -> Result<String> {
    let url = config.endpoint();
    let body = GenerateContentRequest::from_prompt(build_prompt(topic));

    tracing::debug!(%url, model = %config.model, "sending generateContent request");

    let resp = client
        .post(&url)
        .query(&[("key", api_key)])
        .json(&body)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let error_text = resp.text().await.unwrap_or_default();
        return Err(BlogError::Generation(format!(
            "API error {}: {}",
            status, error_text
        )));
    }

    let parsed: GenerateContentResponse = resp.json().await?;
    parsed.into_text()
}

impl From<reqwest::Error> for BlogError {
    fn from(e: reqwest::Error) -> Self {
        // Strip the URL, which carries the API key as a query parameter.
        BlogError::Generation(format!("HTTP error: {}", e.without_url()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let req = GenerateContentRequest::from_prompt("hello".to_string());
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn test_response_text_joins_parts() {
        let body = r##"{
            "candidates": [
                {"content": {"parts": [{"text": "# Rust\n"}, {"text": "Body text"}], "role": "model"}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"##;
        let parsed: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.into_text().unwrap(), "# Rust\nBody text");
    }

    #[test]
    fn test_response_without_candidates_is_error() {
        let parsed: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap();
        assert!(matches!(
            parsed.into_text(),
            Err(BlogError::Generation(_))
        ));
    }

    #[test]
    fn test_prompt_mentions_topic() {
        let prompt = build_prompt("Edge Computing");
        assert!(prompt.contains("Edge Computing"));
        assert!(prompt.contains("800 words"));
    }
}
