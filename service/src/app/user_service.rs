//! User service
//!
//! The only caller-facing component: composes repository calls into use
//! cases and memoizes the current user for its own lifetime.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::domain::entities::{UserId, UserInfo};
use crate::domain::ports::UserRepository;
use crate::error::DomainError;

/// Service for user and friends use cases
pub struct UserService<R>
where
    R: UserRepository,
{
    users: Arc<R>,
    /// Current user, resolved at most once per service instance.
    /// Concurrent first callers wait on a single initialization; errors
    /// are not cached. There is no invalidation path - recreate the
    /// service to refresh.
    current_user: OnceCell<UserInfo>,
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    pub fn new(users: Arc<R>) -> Self {
        Self {
            users,
            current_user: OnceCell::new(),
        }
    }

    /// The authenticated user's domain model, cached across calls
    pub async fn get_current_user(&self) -> Result<UserInfo, DomainError> {
        let info = self
            .current_user
            .get_or_try_init(|| async {
                let id = self.users.get_current_user_id().await?;
                self.users.get_user(&id).await
            })
            .await?;
        Ok(info.clone())
    }

    /// Fetch any user's domain model
    pub async fn get_user(&self, id: &UserId) -> Result<UserInfo, DomainError> {
        self.users.get_user(id).await
    }

    /// The current user's friends
    pub async fn get_my_friends(&self) -> Result<Vec<UserInfo>, DomainError> {
        let me = self.get_current_user().await?;
        self.users.get_user_friends(me.id()).await
    }

    /// Any user's friends
    pub async fn get_user_friends(&self, id: &UserId) -> Result<Vec<UserInfo>, DomainError> {
        self.users.get_user_friends(id).await
    }

    /// Add every user matching `name` as a friend of the current user
    ///
    /// Returns the number of additions that succeeded. A failed addition
    /// is logged and skipped; it never fails the batch.
    pub async fn add_friends_by_name(&self, name: &str) -> Result<usize, DomainError> {
        let me = self.get_current_user().await?;
        let matches = self.users.find_users_by_name(name).await?;

        let mut added = 0;
        for user in &matches {
            match self.users.add_friend(me.id(), user.id()).await {
                Ok(()) => added += 1,
                Err(err) => {
                    tracing::warn!(friend_id = %user.id(), error = %err, "failed to add friend");
                }
            }
        }
        Ok(added)
    }
}
