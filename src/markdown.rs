//! Markdown Rendering
//!
//! Recipe descriptions and notes are stored as markdown. Raw HTML in the
//! source is shown as text, links with a script-capable scheme are
//! neutralized, and external links open in a new tab.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

/// Parse markdown to HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options()).map(transform_event);
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

/// Parse markdown for inline use (strips outer <p> tags)
pub fn parse_markdown_inline(text: &str) -> String {
    let html = parse_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

fn transform_event(event: Event<'_>) -> Event<'_> {
    match event {
        // Never inject markup from user content
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) if !is_safe_url(&dest_url) => {
            Event::Start(Tag::Link { link_type, dest_url: CowStr::Borrowed("#"), title, id })
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) if !is_safe_url(&dest_url) => {
            Event::Start(Tag::Image { link_type, dest_url: CowStr::Borrowed(""), title, id })
        }
        Event::Start(Tag::Link { dest_url, title, .. }) if is_external(&dest_url) => {
            let html = format!(
                r#"<a href="{}" title="{}" target="_blank" rel="noopener noreferrer">"#,
                escape_attr(&dest_url),
                escape_attr(&title)
            );
            Event::Html(CowStr::from(html))
        }
        other => other,
    }
}

fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Relative URLs plus http, https and mailto
fn is_safe_url(url: &str) -> bool {
    // Browsers ignore whitespace and control characters inside a scheme
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    let scheme_end = cleaned.find(|c| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(i) if cleaned[i..].starts_with(':') => {
            matches!(&cleaned[..i], "http" | "https" | "mailto")
        }
        _ => true,
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
