//! Directory-backed implementation of the UserRepository port
//!
//! Orchestrates directory calls and DTO mapping. List operations resolve
//! each element one at a time, in input order.

use async_trait::async_trait;
use std::sync::Arc;

use crate::adapters::directory::mapper;
use crate::domain::entities::{UserId, UserInfo};
use crate::domain::ports::{UserDirectory, UserRepository};
use crate::error::DomainError;

/// Directory implementation of UserRepository
pub struct DirectoryUserRepository<D: UserDirectory> {
    directory: Arc<D>,
}

impl<D: UserDirectory> DirectoryUserRepository<D> {
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl<D: UserDirectory> UserRepository for DirectoryUserRepository<D> {
    async fn get_current_user_id(&self) -> Result<UserId, DomainError> {
        let user = self.directory.get_current_user().await?;
        Ok(UserId(user.id))
    }

    async fn get_user(&self, id: &UserId) -> Result<UserInfo, DomainError> {
        let profile = self.directory.get_profile(id).await?;
        mapper::profile_to_info(profile)
    }

    async fn find_users_by_name(&self, name: &str) -> Result<Vec<UserInfo>, DomainError> {
        let users = self.directory.get_users_by_name(name).await?;

        let mut found = Vec::with_capacity(users.len());
        for user in users {
            let id = UserId(user.id);
            // Per-item policy: a match whose profile cannot be resolved is
            // dropped from the result, not a batch failure.
            match self.get_user(&id).await {
                Ok(info) => found.push(info),
                Err(err) => {
                    tracing::debug!(user_id = %id, error = %err, "dropping unresolvable match");
                }
            }
        }
        Ok(found)
    }

    async fn add_friend(&self, user_id: &UserId, friend_id: &UserId) -> Result<(), DomainError> {
        self.directory
            .add_friend_for_current(user_id, friend_id)
            .await?;
        Ok(())
    }

    async fn get_user_friends(&self, id: &UserId) -> Result<Vec<UserInfo>, DomainError> {
        let friends = self.directory.get_user_friends(id).await?;

        let mut infos = Vec::with_capacity(friends.len());
        for friend in friends {
            let friend_id = UserId::new(friend.id.clone());
            // Per-item policy: failed enrichment degrades to the basic view
            // built from the record we already hold. Never drops the entry.
            let info = match self.directory.get_profile(&friend_id).await {
                Ok(profile) => match mapper::profile_to_info(profile) {
                    Ok(info) => info,
                    Err(err) => {
                        tracing::debug!(user_id = %friend_id, error = %err, "malformed profile, degrading to basic view");
                        mapper::user_to_info(friend)
                    }
                },
                Err(err) => {
                    tracing::debug!(user_id = %friend_id, error = %err, "profile fetch failed, degrading to basic view");
                    mapper::user_to_info(friend)
                }
            };
            infos.push(info);
        }
        Ok(infos)
    }
}
