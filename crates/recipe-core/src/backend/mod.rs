//! Backend Client
//!
//! HTTP access to the hosted recipe database (PostgREST conventions).

mod client;
mod query;
mod sources;

pub use client::{ClientConfig, RestClient};
pub use query::{build_url, parse_total_count, quote_filter_value, range_params, visible_to, RECIPE_DETAIL_SELECT};
pub use sources::{TableRangeSource, TagSearchSource, NEWEST_FIRST};
