//! Domain Layer - Core Entity Trait
//!
//! Basic contract shared by every record the UI lists or displays.

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    /// The backend call failed (network error or backend-reported error)
    Backend(String),
    /// The backend answered but the payload could not be decoded
    Decode(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Backend(msg) => write!(f, "Backend error: {}", msg),
            DomainError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            DomainError::Decode(e.to_string())
        } else {
            DomainError::Backend(e.to_string())
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind() {
        let err = DomainError::Backend("connection refused".to_string());
        assert_eq!(err.to_string(), "Backend error: connection refused");

        let err = DomainError::NotFound("recipe 7".to_string());
        assert_eq!(err.to_string(), "Not found: recipe 7");
    }

    #[test]
    fn test_json_error_maps_to_decode() {
        let parse_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: DomainError = parse_err.into();
        assert!(matches!(err, DomainError::Decode(_)));
    }
}
