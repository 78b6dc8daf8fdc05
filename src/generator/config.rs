use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-pro";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Configuration for the content generator.
///
/// Built once at startup and handed to [`super::ContentGenerator`]. A missing
/// API key is a valid configuration and selects demo content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Gemini API key; `None` means demo mode
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Model name, e.g. "gemini-pro"
    pub model: String,
    /// Base URL of the Generative Language API
    pub api_base: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Demo-only configuration with no credential.
    pub fn demo() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The API key, ignoring blank values.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }

    /// Endpoint for a `generateContent` call, without the key.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let config = GeneratorConfig::demo().with_api_key("   ");
        assert!(!config.has_api_key());

        let config = GeneratorConfig::demo().with_api_key("abc");
        assert_eq!(config.api_key(), Some("abc"));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let config = GeneratorConfig {
            api_base: "http://localhost:8080/".to_string(),
            ..GeneratorConfig::default()
        };
        assert_eq!(
            config.endpoint(),
            "http://localhost:8080/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_serialization_omits_key() {
        let config = GeneratorConfig::demo().with_api_key("secret");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
        let parsed: GeneratorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.model, config.model);
        assert!(parsed.api_key.is_none());
    }
}
