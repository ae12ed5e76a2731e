//! Account Panel Component
//!
//! Connection settings in effect plus the recent log lines, for diagnosing
//! a misconfigured page.

use leptos::prelude::*;

use crate::context::use_app_context;

fn mask_key(key: &str) -> String {
    if key.is_empty() {
        return "(not set)".to_string();
    }
    let visible: String = key.chars().take(6).collect();
    format!("{}…", visible)
}

#[component]
pub fn AccountPanel() -> impl IntoView {
    let config = use_app_context().config();
    let (lines, set_lines) = signal(rolling_logger::recent_lines());

    view! {
        <section class="account-panel">
            <h2>"Account"</h2>

            <dl class="config-list">
                <dt>"Backend"</dt>
                <dd>{config.api_url.clone()}</dd>
                <dt>"API key"</dt>
                <dd>{mask_key(&config.anon_key)}</dd>
                <dt>"User"</dt>
                <dd>{config.user_id.clone().unwrap_or_else(|| "(signed out)".to_string())}</dd>
                <dt>"Page size"</dt>
                <dd>{config.page_size}</dd>
            </dl>

            <div class="diagnostics">
                <div class="diagnostics-header">
                    <h3>"Recent log"</h3>
                    <button on:click=move |_| set_lines.set(rolling_logger::recent_lines())>"Refresh"</button>
                </div>
                <pre class="log-lines">{move || lines.get().join("\n")}</pre>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key(""), "(not set)");
        assert_eq!(mask_key("abcdefghij"), "abcdef…");
        assert_eq!(mask_key("abc"), "abc…");
    }
}
