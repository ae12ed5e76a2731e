//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use recipe_core::backend::RestClient;

use crate::config::AppConfig;

/// App-wide config and signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Bumped after edits so screens refetch - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped after edits so screens refetch - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(config: AppConfig, reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            config: StoredValue::new(config),
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Backend client for the configured project
    pub fn client(&self) -> RestClient {
        RestClient::new(self.config.with_value(|c| c.client_config()))
    }

    pub fn page_size(&self) -> usize {
        self.config.with_value(|c| c.page_size)
    }

    /// Signed-in user, if the page provided one
    pub fn user_id(&self) -> Option<String> {
        self.config.with_value(|c| c.user_id.clone())
    }

    /// Trigger a reload of dependent screens
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
