//! Heuristic extraction of article fields from generated text.
//!
//! This is deliberately shallow: the title comes from the first line if it
//! carries a Markdown heading marker, and the summary and tags are templated
//! from the topic. It is not a Markdown parser.

use crate::entity::{ArticleDraft, TAG_DELIMITER};
use crate::error::{BlogError, Result};

const HEADING_MARKER: char = '#';

/// Tags attached to every successfully parsed article, after the topic tag.
const STANDARD_TAGS: &[&str] = &["guide", "tutorial", "comprehensive", "technology"];

/// Tags used when parsing fails and a degraded record is returned.
const FALLBACK_TAGS: &[&str] = &["guide", "knowledge"];

/// Turn raw article text into a draft. Never fails; problems yield a degraded draft.
pub fn parse(text: &str, topic: &str) -> ArticleDraft {
    match try_parse(text, topic) {
        Ok(draft) => draft,
        Err(e) => {
            tracing::warn!(topic, error = %e, "parsing failed, using degraded article");
            degraded(text, topic)
        }
    }
}

fn try_parse(text: &str, topic: &str) -> Result<ArticleDraft> {
    // Blank text is the one input with nothing to extract. It gets the degraded
    // record instead of the templated one. `ContentGenerator` never yields blank
    // text, so only direct callers of `parse` reach this.
    if text.trim().is_empty() {
        return Err(BlogError::Parse("article text is empty".to_string()));
    }

    Ok(ArticleDraft {
        topic: topic.to_string(),
        title: extract_title(text).unwrap_or_else(|| format!("The Complete Guide to {}", topic)),
        content: text.to_string(),
        summary: format!(
            "Comprehensive guide covering all aspects of {} from fundamentals to advanced applications",
            topic
        ),
        tags: build_tags(topic, STANDARD_TAGS),
        word_count: word_count(text),
    })
}

fn degraded(text: &str, topic: &str) -> ArticleDraft {
    ArticleDraft {
        topic: topic.to_string(),
        title: format!("Complete Guide to {}", topic),
        content: text.to_string(),
        summary: format!("Detailed exploration of {}", topic),
        tags: build_tags(topic, FALLBACK_TAGS),
        word_count: word_count(text),
    }
}

/// Number of whitespace-separated tokens.
pub fn word_count(text: &str) -> u64 {
    text.split_whitespace().count() as u64
}

/// Title from the first line, if that line carries a heading marker.
///
/// Every marker on the line is removed, not only the leading run. A line that
/// is nothing but markers gives no title.
fn extract_title(text: &str) -> Option<String> {
    let first_line = text.split('\n').next()?;
    if !first_line.contains(HEADING_MARKER) {
        return None;
    }

    let title = first_line.replace(HEADING_MARKER, "");
    let title = title.trim();
    (!title.is_empty()).then(|| title.to_string())
}

fn build_tags(topic: &str, rest: &[&str]) -> Vec<String> {
    std::iter::once(topic.to_lowercase())
        .chain(rest.iter().map(|t| t.to_string()))
        .filter_map(|t| sanitize_tag(&t))
        .collect()
}

/// Strip the storage delimiter from a tag and normalize whitespace.
fn sanitize_tag(tag: &str) -> Option<String> {
    let cleaned = tag
        .replace(TAG_DELIMITER, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    (!cleaned.is_empty()).then_some(cleaned)
}
