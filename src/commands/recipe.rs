//! Recipe Commands
//!
//! Detail fetch and step/ingredient ordering.

use recipe_core::backend::RestClient;
use recipe_core::{DomainError, RecipeDetail};

/// Table holding each kind of ordered sub-item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderedTable {
    Steps,
    Ingredients,
}

impl OrderedTable {
    pub fn name(&self) -> &'static str {
        match self {
            OrderedTable::Steps => "steps",
            OrderedTable::Ingredients => "ingredients",
        }
    }
}

/// Fetch a recipe and normalize it for display
pub async fn get_recipe_detail(client: &RestClient, id: i64, user_id: Option<&str>) -> Result<RecipeDetail, String> {
    let user_id = user_id.ok_or_else(|| "Sign in to view recipes".to_string())?;
    match client.get_recipe_detail(id, user_id).await {
        Ok(raw) => Ok(RecipeDetail::from(raw)),
        Err(DomainError::NotFound(_)) => Err("Recipe not found".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

/// Persist `(id, sort_number)` pairs for steps or ingredients
pub async fn save_sort_order(client: &RestClient, table: OrderedTable, order: &[(i64, i64)]) -> Result<(), String> {
    client
        .save_sort_order(table.name(), order)
        .await
        .map_err(|e| e.to_string())
}
