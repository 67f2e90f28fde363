//! Unified error types for the Circle service
//!
//! This module defines error types for each layer:
//! - `DirectoryError`: user directory client errors
//! - `DomainError`: repository and use-case errors

use thiserror::Error;

/// User directory client errors
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized - invalid token")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Domain layer errors - returned by repositories and use cases
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Directory error: {0}")]
    Directory(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DirectoryError> for DomainError {
    fn from(e: DirectoryError) -> Self {
        match e {
            DirectoryError::UserNotFound(id) => {
                DomainError::NotFound(format!("User {} not found", id))
            }
            DirectoryError::Unauthorized => {
                DomainError::Unauthorized("directory rejected credentials".to_string())
            }
            other => DomainError::Directory(other.to_string()),
        }
    }
}
