//! Recipe Detail Formatter
//!
//! Normalizes a raw recipe record into the view model the detail screen
//! renders. Never fails: absent or malformed input degrades to defaults.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Collection, Ingredient, RawRecipe, Step, Tag};

/// Normalized recipe ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub source_url: String,
    pub notes: String,
    pub prep_time: i64,
    pub cook_time: i64,
    /// Always `prep_time + cook_time`, saturating at the `i64` bounds
    pub total_time: i64,
    pub servings: i64,
    pub is_public: bool,
    pub created_at: String,
    /// Ascending by `sort_number`
    pub steps: Vec<Step>,
    /// Ascending by `sort_number`
    pub ingredients: Vec<Ingredient>,
    pub collections: Vec<Collection>,
    pub tags: Vec<Tag>,
}

impl Default for RecipeDetail {
    fn default() -> Self {
        Self {
            id: 0,
            user_id: String::new(),
            name: String::new(),
            description: String::new(),
            image_url: String::new(),
            source_url: String::new(),
            notes: String::new(),
            prep_time: 0,
            cook_time: 0,
            total_time: 0,
            servings: 1,
            is_public: false,
            created_at: String::new(),
            steps: Vec::new(),
            ingredients: Vec::new(),
            collections: Vec::new(),
            tags: Vec::new(),
        }
    }
}

impl From<RawRecipe> for RecipeDetail {
    fn from(raw: RawRecipe) -> Self {
        let prep_time = raw.prep_time.unwrap_or(0);
        let cook_time = raw.cook_time.unwrap_or(0);

        let mut steps: Vec<Step> = raw.steps.into_iter().map(Step::from).collect();
        steps.sort_by_key(|s| s.sort_number);

        let mut ingredients: Vec<Ingredient> = raw.ingredients.into_iter().map(Ingredient::from).collect();
        ingredients.sort_by_key(|i| i.sort_number);

        // Flatten one level of join rows; duplicates are kept
        let collections = raw
            .collection_to_recipes
            .into_iter()
            .filter_map(|link| link.collections)
            .collect();
        let tags = raw
            .recipe_to_tags
            .into_iter()
            .filter_map(|link| link.tags)
            .collect();

        Self {
            id: raw.id.unwrap_or(0),
            user_id: raw.user_id.unwrap_or_default(),
            name: raw.name.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            image_url: raw.image_url.unwrap_or_default(),
            source_url: raw.source_url.unwrap_or_default(),
            notes: raw.notes.unwrap_or_default(),
            prep_time,
            cook_time,
            total_time: prep_time.saturating_add(cook_time),
            servings: raw.servings.unwrap_or(1),
            is_public: raw.is_public.unwrap_or(false),
            created_at: raw.created_at.unwrap_or_default(),
            steps,
            ingredients,
            collections,
            tags,
        }
    }
}

/// Format any JSON value as a recipe detail.
///
/// Non-object input (null, arrays, scalars) yields `RecipeDetail::default()`.
pub fn format_recipe_detail(value: &Value) -> RecipeDetail {
    if !value.is_object() {
        return RecipeDetail::default();
    }
    RawRecipe::deserialize(value)
        .map(RecipeDetail::from)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_total_time_and_step_order() {
        let raw = json!({
            "prep_time": 10,
            "cook_time": 5,
            "steps": [
                { "id": 20, "description": "Bake", "sort_number": 2 },
                { "id": 10, "description": "Mix", "sort_number": 1 }
            ]
        });
        let detail = format_recipe_detail(&raw);
        assert_eq!(detail.total_time, 15);
        assert_eq!(detail.steps[0].sort_number, 1);
        assert_eq!(detail.steps[0].description, "Mix");
        assert!(detail.steps.iter().all(|s| s.is_active));
    }

    #[test]
    fn test_total_time_saturates() {
        let detail = format_recipe_detail(&json!({ "prep_time": i64::MAX, "cook_time": 1 }));
        assert_eq!(detail.total_time, i64::MAX);

        let detail = format_recipe_detail(&json!({ "prep_time": i64::MIN, "cook_time": -5 }));
        assert_eq!(detail.total_time, i64::MIN);
    }

    #[test]
    fn test_empty_object_gives_defaults() {
        let detail = format_recipe_detail(&json!({}));
        assert_eq!(detail, RecipeDetail::default());
        assert_eq!(detail.total_time, 0);
        assert_eq!(detail.servings, 1);
        assert!(!detail.is_public);
        assert!(detail.steps.is_empty());
        assert!(detail.ingredients.is_empty());
        assert!(detail.collections.is_empty());
        assert!(detail.tags.is_empty());
    }

    #[test]
    fn test_null_input_gives_defaults() {
        assert_eq!(format_recipe_detail(&Value::Null), RecipeDetail::default());
        assert_eq!(format_recipe_detail(&json!([1, 2])), RecipeDetail::default());
    }

    #[test]
    fn test_ingredients_sorted_independently() {
        let raw = json!({
            "ingredients": [
                { "id": 1, "name": "Flour", "amount": 200, "unit": "g", "sort_number": 3 },
                { "id": 2, "name": "Eggs", "amount": 2, "sort_number": 1 },
                { "id": 3, "name": "Milk", "sort_number": 2 }
            ],
            "steps": [
                { "id": 1, "sort_number": 1 }
            ]
        });
        let detail = format_recipe_detail(&raw);
        let names: Vec<&str> = detail.ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Eggs", "Milk", "Flour"]);
        assert_eq!(detail.ingredients[1].amount, 0.0);
        assert_eq!(detail.ingredients[1].unit, "");
        assert!(detail.ingredients.iter().all(|i| i.is_active));
    }

    #[test]
    fn test_flattens_join_rows_without_dedup() {
        let raw = json!({
            "collection_to_recipes": [
                { "collections": { "id": 1, "name": "Dinner" } },
                { "collections": null },
                { "collections": { "id": 1, "name": "Dinner" } }
            ],
            "recipe_to_tags": [
                { "tags": { "id": 7, "name": "Quick" } },
                { "tags": { "id": 8, "name": "Spicy", "color": "#e74c3c" } }
            ]
        });
        let detail = format_recipe_detail(&raw);
        assert_eq!(detail.collections.len(), 2);
        assert_eq!(detail.collections[0].name, "Dinner");
        let tag_ids: Vec<i64> = detail.tags.iter().map(|t| t.id).collect();
        assert_eq!(tag_ids, vec![7, 8]);
    }

    #[test]
    fn test_malformed_scalars_fall_back() {
        let raw = json!({
            "name": "Pancakes",
            "prep_time": "ten",
            "cook_time": 12,
            "servings": null,
            "is_public": "yes"
        });
        let detail = format_recipe_detail(&raw);
        assert_eq!(detail.name, "Pancakes");
        assert_eq!(detail.prep_time, 0);
        assert_eq!(detail.total_time, 12);
        assert_eq!(detail.servings, 1);
        assert!(!detail.is_public);
    }
}
