//! PostgREST Query Helpers
//!
//! Pure URL and header handling, kept apart from the HTTP calls so it can be
//! tested without a server.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::domain::{DomainError, DomainResult};
use crate::paging::PageRequest;

/// Characters PostgREST query values may keep unescaped
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'*')
    .remove(b',')
    .remove(b'(')
    .remove(b')');

/// Embedded relations loaded with a recipe detail
pub const RECIPE_DETAIL_SELECT: &str =
    "*,steps(*),ingredients(*),collection_to_recipes(collections(*)),recipe_to_tags(tags(*))";

/// Build `{base}/rest/v1/{path}?k=v&...` with encoded values
pub fn build_url(base_url: &str, path: &str, params: &[(&str, String)]) -> String {
    let mut url = format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), path);
    for (i, (key, value)) in params.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.extend(utf8_percent_encode(value, QUERY_VALUE));
    }
    url
}

/// Offset/limit (and optional ordering) parameters of a range query
pub fn range_params(order: Option<&str>, request: &PageRequest) -> Vec<(&'static str, String)> {
    let mut params = vec![("select", "*".to_string())];
    if let Some(order) = order {
        params.push(("order", order.to_string()));
    }
    params.push(("offset", request.offset.to_string()));
    params.push(("limit", request.limit.to_string()));
    params
}

/// Exact total from a `Content-Range` header such as `0-9/42` or `*/0`
/// Double-quote a value for use inside a PostgREST logic filter such as
/// `or=(...)`, where `,` `.` `(` `)` are otherwise reserved
pub fn quote_filter_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Rows owned by `user_id` or marked public
pub fn visible_to(user_id: &str) -> String {
    format!("(user_id.eq.{},is_public.is.true)", quote_filter_value(user_id))
}

pub fn parse_total_count(content_range: Option<&str>) -> DomainResult<usize> {
    let header = content_range
        .ok_or_else(|| DomainError::Backend("response has no Content-Range header".to_string()))?;

    let (_, total) = header
        .rsplit_once('/')
        .ok_or_else(|| DomainError::Backend(format!("malformed Content-Range: {}", header)))?;

    if total == "*" {
        return Err(DomainError::Backend("backend did not return an exact count".to_string()));
    }

    total
        .trim()
        .parse()
        .map_err(|_| DomainError::Backend(format!("malformed Content-Range: {}", header)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_to_quotes_user_id() {
        assert_eq!(visible_to("u-1"), r#"(user_id.eq."u-1",is_public.is.true)"#);
        // Reserved characters stay inside the quoted value
        assert_eq!(
            visible_to("x),id.gt.(0"),
            r#"(user_id.eq."x),id.gt.(0",is_public.is.true)"#
        );
        assert_eq!(quote_filter_value(r#"a"b\c"#), r#""a\"b\\c""#);
    }

    #[test]
    fn test_build_url_encodes_values() {
        let url = build_url(
            "https://db.example.com/",
            "recipes",
            &[("id", "eq.4".to_string()), ("name", "ilike.*mac & cheese*".to_string())],
        );
        assert_eq!(
            url,
            "https://db.example.com/rest/v1/recipes?id=eq.4&name=ilike.*mac%20%26%20cheese*"
        );
    }

    #[test]
    fn test_detail_select_survives_encoding() {
        let url = build_url("http://x", "recipes", &[("select", RECIPE_DETAIL_SELECT.to_string())]);
        assert!(url.ends_with("select=*,steps(*),ingredients(*),collection_to_recipes(collections(*)),recipe_to_tags(tags(*))"));
    }

    #[test]
    fn test_range_params() {
        let request = PageRequest { offset: 20, limit: 10, search_term: None };
        let params = range_params(Some("created_at.desc"), &request);
        assert_eq!(
            params,
            vec![
                ("select", "*".to_string()),
                ("order", "created_at.desc".to_string()),
                ("offset", "20".to_string()),
                ("limit", "10".to_string()),
            ]
        );

        let unordered = range_params(None, &request);
        assert!(unordered.iter().all(|(k, _)| *k != "order"));
    }

    #[test]
    fn test_parse_total_count() {
        assert_eq!(parse_total_count(Some("0-9/42")).unwrap(), 42);
        assert_eq!(parse_total_count(Some("*/0")).unwrap(), 0);
        assert!(parse_total_count(Some("0-9/*")).is_err());
        assert!(parse_total_count(Some("garbage")).is_err());
        assert!(parse_total_count(None).is_err());
    }
}
