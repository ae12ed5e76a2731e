//! Collection Entity
//!
//! User-curated groups of recipes, listed newest first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A named group of recipes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for Collection {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Join row of `collection_to_recipes` with the embedded collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionLink {
    #[serde(default, deserialize_with = "crate::lenient::lenient")]
    pub collections: Option<Collection>,
}
