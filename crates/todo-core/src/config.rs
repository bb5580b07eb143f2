//! Remote Collection Endpoint Configuration

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::domain::ItemId;

/// Base URL used when no override is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Characters that must be escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Where one list talks to: `{base_url}/api/{backend}/todo`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    backend: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, backend: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            backend: backend.into(),
        }
    }

    /// Use `base_url` when it is set and non-blank, else [`DEFAULT_BASE_URL`]
    pub fn with_override(base_url: Option<&str>, backend: impl Into<String>) -> Self {
        let base = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        Self::new(base, backend)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn backend(&self) -> &str {
        &self.backend
    }

    /// URL for list and create
    pub fn collection_url(&self) -> String {
        format!(
            "{}/api/{}/todo",
            self.base_url,
            utf8_percent_encode(&self.backend, PATH_SEGMENT)
        )
    }

    /// URL for update and delete of one item
    pub fn item_url(&self, id: ItemId) -> String {
        format!("{}/{}", self.collection_url(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let config = ApiConfig::new("http://api.example.com/", "go");
        assert_eq!(config.collection_url(), "http://api.example.com/api/go/todo");
        assert_eq!(config.item_url(12), "http://api.example.com/api/go/todo/12");
    }

    #[test]
    fn test_override_falls_back_to_default() {
        assert_eq!(ApiConfig::with_override(None, "go").base_url(), DEFAULT_BASE_URL);
        assert_eq!(ApiConfig::with_override(Some("  "), "go").base_url(), DEFAULT_BASE_URL);
        assert_eq!(
            ApiConfig::with_override(Some("https://todo.internal//"), "go").base_url(),
            "https://todo.internal"
        );
    }

    #[test]
    fn test_backend_is_one_segment() {
        let config = ApiConfig::new(DEFAULT_BASE_URL, "rust/axum v2");
        assert_eq!(
            config.collection_url(),
            "http://localhost:8000/api/rust%2Faxum%20v2/todo"
        );
    }
}
