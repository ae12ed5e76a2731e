//! App Configuration
//!
//! Read once at start from the `window.__RECIPE_BOOK_CONFIG__` object that
//! `index.html` defines. Missing or invalid settings fall back to defaults.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use recipe_core::backend::ClientConfig;
use recipe_core::paging::DEFAULT_PAGE_SIZE;
use recipe_core::{DomainError, DomainResult};

/// Name of the global holding the config object
pub const CONFIG_GLOBAL: &str = "__RECIPE_BOOK_CONFIG__";

const DEFAULT_API_URL: &str = "http://localhost:54321";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub api_url: String,
    pub anon_key: String,
    pub user_id: Option<String>,
    pub access_token: Option<String>,
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            anon_key: String::new(),
            user_id: None,
            access_token: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> DomainResult<()> {
        if self.api_url.trim().is_empty() {
            return Err(DomainError::InvalidInput("apiUrl must not be empty".to_string()));
        }
        if self.page_size == 0 {
            return Err(DomainError::InvalidInput("pageSize must be positive".to_string()));
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_url.trim().to_string(),
            api_key: self.anon_key.clone(),
            access_token: self.access_token.clone(),
        }
    }

    /// Keep a parsed config only if it validates
    fn or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("[Config] {}, using defaults", e);
                Self::default()
            }
        }
    }
}

/// Load the config from the page, falling back to defaults
pub fn load_config() -> AppConfig {
    let raw = web_sys::window()
        .and_then(|win| js_sys::Reflect::get(&win, &JsValue::from_str(CONFIG_GLOBAL)).ok())
        .filter(|value| !value.is_undefined() && !value.is_null());

    let Some(raw) = raw else {
        log::warn!("[Config] window.{} not set, using defaults", CONFIG_GLOBAL);
        return AppConfig::default();
    };

    match serde_wasm_bindgen::from_value::<AppConfig>(raw) {
        Ok(config) => config.or_default(),
        Err(e) => {
            log::warn!("[Config] could not read window.{}: {}", CONFIG_GLOBAL, e);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"apiUrl": "https://db.example.com", "userId": "u-1"}"#).unwrap();
        assert_eq!(config.api_url, "https://db.example.com");
        assert_eq!(config.user_id.as_deref(), Some("u-1"));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config_replaced() {
        let config = AppConfig {
            page_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.or_default(), AppConfig::default());

        let config = AppConfig {
            api_url: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_client_config() {
        let config = AppConfig {
            api_url: " https://db.example.com ".to_string(),
            anon_key: "anon".to_string(),
            access_token: Some("jwt".to_string()),
            ..Default::default()
        };
        let client = config.client_config();
        assert_eq!(client.base_url, "https://db.example.com");
        assert_eq!(client.api_key, "anon");
        assert_eq!(client.access_token.as_deref(), Some("jwt"));
    }
}
