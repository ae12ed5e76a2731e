//! Profile Entity
//!
//! Public profile row of the signed-in user.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Editable subset of a profile, sent as a PATCH body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub username: String,
    pub full_name: String,
    pub website: String,
}

impl ProfileUpdate {
    /// Usernames must be at least three characters after trimming
    pub fn validate(&self) -> super::DomainResult<()> {
        if self.username.trim().chars().count() < 3 {
            return Err(super::DomainError::InvalidInput(
                "username must be at least 3 characters".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<&Profile> for ProfileUpdate {
    fn from(profile: &Profile) -> Self {
        Self {
            username: profile.username.clone().unwrap_or_default(),
            full_name: profile.full_name.clone().unwrap_or_default(),
            website: profile.website.clone().unwrap_or_default(),
        }
    }
}
