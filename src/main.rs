//! Recipe Book Frontend Entry Point

mod commands;
mod config;
mod context;
mod store;
mod hooks;
mod components;
mod app;
mod format;
mod markdown;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger(rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::error_1(&format!("[APP] logger not installed: {}", e).into());
    }

    let config = config::load_config();
    log::info!("[APP] backend {} (page size {})", config.api_url, config.page_size);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
