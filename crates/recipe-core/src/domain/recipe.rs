//! Recipe Entities
//!
//! `RawRecipe` mirrors the backend row with every embedded relation, tolerating
//! missing or malformed fields. `RecipeSummary` is the lightweight list row.
//! `Step` and `Ingredient` are the normalized ordered sub-items of a detail view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::collection::CollectionLink;
use super::entity::Entity;
use super::tag::TagLink;
use crate::lenient::{lenient, lenient_list};

/// Recipe row as returned by the detail query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecipe {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub source_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub prep_time: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub cook_time: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub servings: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_public: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub steps: Vec<RawStep>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub ingredients: Vec<RawIngredient>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub collection_to_recipes: Vec<CollectionLink>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub recipe_to_tags: Vec<TagLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawStep {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub sort_number: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawIngredient {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub sort_number: Option<i64>,
}

/// Recipe row for the paginated recipe list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub prep_time: Option<i64>,
    #[serde(default)]
    pub cook_time: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl RecipeSummary {
    pub fn total_time(&self) -> i64 {
        self.prep_time.unwrap_or(0) + self.cook_time.unwrap_or(0)
    }
}

impl Entity for RecipeSummary {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// A normalized preparation step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: i64,
    pub description: String,
    pub sort_number: i64,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl From<RawStep> for Step {
    fn from(raw: RawStep) -> Self {
        Self {
            id: raw.id.unwrap_or(0),
            description: raw.description.unwrap_or_default(),
            sort_number: raw.sort_number.unwrap_or(0),
            is_active: true,
        }
    }
}

impl Entity for Step {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// A normalized ingredient line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub sort_number: i64,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl From<RawIngredient> for Ingredient {
    fn from(raw: RawIngredient) -> Self {
        Self {
            id: raw.id.unwrap_or(0),
            name: raw.name.unwrap_or_default(),
            amount: raw.amount.unwrap_or(0.0),
            unit: raw.unit.unwrap_or_default(),
            sort_number: raw.sort_number.unwrap_or(0),
            is_active: true,
        }
    }
}

impl Entity for Ingredient {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_recipe_tolerates_wrong_types() {
        let json = r#"{"id": 3, "name": 42, "servings": "four", "steps": "none"}"#;
        let raw: RawRecipe = serde_json::from_str(json).unwrap();
        assert_eq!(raw.id, Some(3));
        assert_eq!(raw.name, None);
        assert_eq!(raw.servings, None);
        assert!(raw.steps.is_empty());
    }

    #[test]
    fn test_step_serializes_active_flag_camel_case() {
        let step = Step::from(RawStep {
            id: Some(1),
            description: Some("Whisk".to_string()),
            sort_number: Some(1),
        });
        let value = serde_json::to_value(&step).unwrap();
        assert_eq!(value["isActive"], true);
    }

    #[test]
    fn test_summary_total_time() {
        let summary = RecipeSummary {
            id: 1,
            name: "Soup".to_string(),
            description: None,
            image_url: None,
            prep_time: Some(15),
            cook_time: None,
            created_at: None,
        };
        assert_eq!(summary.total_time(), 15);
    }
}
