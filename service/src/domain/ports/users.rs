//! User repository port
//!
//! Translates directory DTOs into domain models, hiding the mapping step
//! from callers. Note the asymmetric per-item failure policy: name search
//! drops entries it cannot resolve, the friends list degrades them.

use async_trait::async_trait;

use crate::domain::entities::{UserId, UserInfo};
use crate::error::DomainError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Id of the authenticated user
    async fn get_current_user_id(&self) -> Result<UserId, DomainError>;

    /// Fetch a user's full profile as a domain model
    async fn get_user(&self, id: &UserId) -> Result<UserInfo, DomainError>;

    /// All users matching a name, each resolved to a full profile.
    /// Users whose profile cannot be resolved are dropped from the result.
    async fn find_users_by_name(&self, name: &str) -> Result<Vec<UserInfo>, DomainError>;

    /// Record a friendship for `user_id`
    async fn add_friend(&self, user_id: &UserId, friend_id: &UserId) -> Result<(), DomainError>;

    /// A user's friends. A friend whose profile cannot be resolved falls
    /// back to the basic view instead of being dropped.
    async fn get_user_friends(&self, id: &UserId) -> Result<Vec<UserInfo>, DomainError>;
}
