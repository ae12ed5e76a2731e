//! Tag Entity
//!
//! Tags categorize recipes. Listed through the tag-search query.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A tag for categorizing recipes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Unique identifier
    pub id: i64,
    /// Tag name
    pub name: String,
    /// Color (hex, e.g., "#FF5733")
    #[serde(default)]
    pub color: Option<String>,
}

impl Entity for Tag {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Join row of `recipe_to_tags` with the embedded tag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagLink {
    #[serde(default, deserialize_with = "crate::lenient::lenient")]
    pub tags: Option<Tag>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_without_color() {
        let tag: Tag = serde_json::from_str(r#"{"id": 4, "name": "Vegan"}"#).unwrap();
        assert_eq!(tag.id(), 4);
        assert!(tag.color.is_none());
    }

    #[test]
    fn test_link_with_null_tag() {
        let link: TagLink = serde_json::from_str(r#"{"tags": null}"#).unwrap();
        assert!(link.tags.is_none());
    }
}
