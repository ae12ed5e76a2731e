//! REST Client
//!
//! Thin client for the hosted PostgREST backend. Every list query asks for an
//! exact count and reads it back from `Content-Range`.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::query::{build_url, parse_total_count, range_params, visible_to, RECIPE_DETAIL_SELECT};
use crate::domain::{DomainError, DomainResult, Profile, ProfileUpdate, RawRecipe, Tag};
use crate::paging::{Page, PageRequest};

/// Connection settings for the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    /// Public (anon) API key, sent with every request
    pub api_key: String,
    /// Session token of the signed-in user, if any
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Error body returned by PostgREST
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl RestClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str, params: &[(&str, String)]) -> String {
        build_url(&self.config.base_url, path, params)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let token = self
            .config
            .access_token
            .as_deref()
            .unwrap_or(&self.config.api_key);
        builder
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", token))
    }

    /// Generic table range query with exact count
    pub async fn fetch_range<T: DeserializeOwned>(
        &self,
        table: &str,
        order: Option<&str>,
        request: &PageRequest,
    ) -> DomainResult<Page<T>> {
        let url = self.url(table, &range_params(order, request));
        let response = self
            .authorize(self.http.get(url))
            .header("Prefer", "count=exact")
            .send()
            .await?;
        read_page(response).await
    }

    /// Dedicated tag search, default (insertion) order
    pub async fn search_tags(&self, request: &PageRequest) -> DomainResult<Page<Tag>> {
        #[derive(Serialize)]
        struct Args<'a> {
            search_term: &'a str,
        }

        let url = self.url("rpc/search_tags", &range_params(None, request));
        let args = Args {
            search_term: request.search_term.as_deref().unwrap_or(""),
        };
        let response = self
            .authorize(self.http.post(url))
            .header("Prefer", "count=exact")
            .json(&args)
            .send()
            .await?;
        read_page(response).await
    }

    /// One recipe with steps, ingredients, collections and tags embedded.
    ///
    /// Only recipes owned by `user_id` or marked public are visible.
    pub async fn get_recipe_detail(&self, id: i64, user_id: &str) -> DomainResult<RawRecipe> {
        let url = self.url(
            "recipes",
            &[
                ("select", RECIPE_DETAIL_SELECT.to_string()),
                ("id", format!("eq.{}", id)),
                ("or", visible_to(user_id)),
            ],
        );
        let response = self
            .authorize(self.http.get(url))
            .header("Accept", "application/vnd.pgrst.object+json")
            .send()
            .await?;
        let response = check_status(response, || format!("recipe {}", id)).await?;
        Ok(response.json().await?)
    }

    pub async fn get_profile(&self, user_id: &str) -> DomainResult<Profile> {
        let url = self.url("profiles", &[("select", "*".to_string()), ("id", format!("eq.{}", user_id))]);
        let response = self
            .authorize(self.http.get(url))
            .header("Accept", "application/vnd.pgrst.object+json")
            .send()
            .await?;
        let response = check_status(response, || format!("profile {}", user_id)).await?;
        Ok(response.json().await?)
    }

    pub async fn update_profile(&self, user_id: &str, update: &ProfileUpdate) -> DomainResult<()> {
        update.validate()?;
        let url = self.url("profiles", &[("id", format!("eq.{}", user_id))]);
        let response = self.authorize(self.http.patch(url)).json(update).send().await?;
        check_status(response, || format!("profile {}", user_id)).await?;
        Ok(())
    }

    /// Persist new `sort_number`s for rows of `table` (`steps` or `ingredients`)
    pub async fn save_sort_order(&self, table: &str, order: &[(i64, i64)]) -> DomainResult<()> {
        #[derive(Serialize)]
        struct SortNumber {
            sort_number: i64,
        }

        for (id, sort_number) in order {
            let url = self.url(table, &[("id", format!("eq.{}", id))]);
            let response = self
                .authorize(self.http.patch(url))
                .json(&SortNumber { sort_number: *sort_number })
                .send()
                .await?;
            check_status(response, || format!("{} {}", table, id)).await?;
        }
        Ok(())
    }
}

/// Turn a non-success response into a `DomainError`
async fn check_status(response: Response, what: impl FnOnce() -> String) -> DomainResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // 406 is what PostgREST answers when a single-object request matches no row
    if status.as_u16() == 404 || status.as_u16() == 406 {
        return Err(DomainError::NotFound(what()));
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|b| b.message)
        .unwrap_or(body);
    Err(DomainError::Backend(format!("{}: {}", status, message)))
}

async fn read_page<T: DeserializeOwned>(response: Response) -> DomainResult<Page<T>> {
    let response = check_status(response, || "range".to_string()).await?;
    let total_count = parse_total_count(
        response
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok()),
    )?;
    let records: Vec<T> = response.json().await?;
    Ok(Page::new(records, total_count))
}
