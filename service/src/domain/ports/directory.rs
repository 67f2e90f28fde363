//! User directory port
//!
//! The directory is the remote system of record for users, profiles, and
//! friendships. This port abstracts its API; `HttpUserDirectory` is the
//! production implementation and tests use an in-memory mock.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::UserId;
use crate::error::DirectoryError;

/// Raw user record as the directory returns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub id: String,
    pub name: String,
}

/// Full profile record for a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryProfile {
    pub id: String,
    pub name: String,
    pub friends_count: i64,
    pub is_student: bool,
}

/// Client for the remote user directory
///
/// All operations are sequential remote calls with no retry or timeout;
/// callers that want either must wrap the call chain themselves.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find users whose name matches exactly
    async fn get_users_by_name(&self, name: &str) -> Result<Vec<DirectoryUser>, DirectoryError>;

    /// Get the full profile for a user
    async fn get_profile(&self, id: &UserId) -> Result<DirectoryProfile, DirectoryError>;

    /// List a user's friends
    async fn get_user_friends(&self, id: &UserId) -> Result<Vec<DirectoryUser>, DirectoryError>;

    /// Get the authenticated user
    async fn get_current_user(&self) -> Result<DirectoryUser, DirectoryError>;

    /// Record a friendship on behalf of the current user
    async fn add_friend_for_current(
        &self,
        user_id: &UserId,
        friend_id: &UserId,
    ) -> Result<(), DirectoryError>;
}
