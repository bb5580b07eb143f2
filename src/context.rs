//! Application Context
//!
//! Shared configuration provided via Leptos Context API.

use leptos::prelude::*;
use todo_core::ApiConfig;

use crate::config::AppConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    /// Backends to render, in configured order
    pub fn backends(&self) -> Vec<String> {
        self.config.with_value(|config| config.backends.clone())
    }

    /// Endpoint settings for one backend's list
    pub fn api_config(&self, backend: &str) -> ApiConfig {
        self.config.with_value(|config| config.api_config(backend))
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
