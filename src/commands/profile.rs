//! Profile Commands

use recipe_core::backend::RestClient;
use recipe_core::domain::{Profile, ProfileUpdate};

pub async fn get_profile(client: &RestClient, user_id: &str) -> Result<Profile, String> {
    client.get_profile(user_id).await.map_err(|e| e.to_string())
}

pub async fn update_profile(client: &RestClient, user_id: &str, update: &ProfileUpdate) -> Result<(), String> {
    client.update_profile(user_id, update).await.map_err(|e| e.to_string())
}
