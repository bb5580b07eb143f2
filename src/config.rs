//! Build-time Configuration
//!
//! Settings baked in when the WASM bundle is built:
//! `TODO_API_URL` (base URL) and `TODO_BACKENDS` (comma-separated backend ids).

use todo_core::ApiConfig;

/// Backend rendered when none are configured
pub const DEFAULT_BACKEND: &str = "go";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Raw base URL override; `None` uses the core default
    pub api_url: Option<String>,
    /// One list is rendered per backend, in this order
    pub backends: Vec<String>,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("TODO_API_URL"), option_env!("TODO_BACKENDS"))
    }

    pub fn from_values(api_url: Option<&str>, backends: Option<&str>) -> Self {
        let mut parsed: Vec<String> = Vec::new();
        for backend in backends.unwrap_or_default().split(',').map(str::trim) {
            if !backend.is_empty() && !parsed.iter().any(|b| b == backend) {
                parsed.push(backend.to_string());
            }
        }
        if parsed.is_empty() {
            parsed.push(DEFAULT_BACKEND.to_string());
        }

        Self {
            api_url: api_url.map(str::to_string),
            backends: parsed,
        }
    }

    /// Endpoint settings for one backend's list
    pub fn api_config(&self, backend: &str) -> ApiConfig {
        ApiConfig::with_override(self.api_url.as_deref(), backend)
    }
}
