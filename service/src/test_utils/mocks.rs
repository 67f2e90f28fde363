//! Mock implementation of the directory port
//!
//! An in-memory directory that can be configured for testing. It stores
//! records in memory, injects per-id or global failures, and counts calls
//! so tests can verify caching and batch behavior.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::domain::entities::UserId;
use crate::domain::ports::{DirectoryProfile, DirectoryUser, UserDirectory};
use crate::error::DirectoryError;

/// In-memory user directory
///
/// Builder-style `with_*` methods configure state before use; `set_*` and
/// `insert_*` mutate a directory that is already shared.
#[derive(Default)]
pub struct InMemoryUserDirectory {
    users: Arc<RwLock<Vec<DirectoryUser>>>,
    profiles: Arc<RwLock<HashMap<String, DirectoryProfile>>>,
    friends: Arc<RwLock<HashMap<String, Vec<DirectoryUser>>>>,
    current_user: Arc<RwLock<Option<DirectoryUser>>>,
    failing_profiles: Arc<RwLock<HashSet<String>>>,
    failing_adds: Arc<RwLock<HashSet<String>>>,
    should_fail: Arc<RwLock<bool>>,
    current_user_calls: Arc<RwLock<u32>>,
    profile_calls: Arc<RwLock<u32>>,
    friends_added: Arc<RwLock<Vec<(String, String)>>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A directory where every call fails
    pub fn failing() -> Self {
        let directory = Self::default();
        *directory.should_fail.write().unwrap() = true;
        directory
    }

    /// Add a user visible to name search
    pub fn with_user(self, user: DirectoryUser) -> Self {
        self.users.write().unwrap().push(user);
        self
    }

    /// Add a full profile, keyed by its id
    pub fn with_profile(self, profile: DirectoryProfile) -> Self {
        self.insert_profile(profile);
        self
    }

    /// Append a friend to a user's friend list
    pub fn with_friend(self, user_id: &str, friend: DirectoryUser) -> Self {
        self.friends
            .write()
            .unwrap()
            .entry(user_id.to_string())
            .or_default()
            .push(friend);
        self
    }

    /// Set the authenticated user
    pub fn with_current_user(self, user: DirectoryUser) -> Self {
        self.set_current_user(user);
        self
    }

    /// Make profile lookups fail for one id
    pub fn with_failing_profile(self, id: &str) -> Self {
        self.failing_profiles.write().unwrap().insert(id.to_string());
        self
    }

    /// Make friend additions fail for one friend id
    pub fn with_failing_add(self, friend_id: &str) -> Self {
        self.failing_adds
            .write()
            .unwrap()
            .insert(friend_id.to_string());
        self
    }

    pub fn set_current_user(&self, user: DirectoryUser) {
        *self.current_user.write().unwrap() = Some(user);
    }

    pub fn insert_profile(&self, profile: DirectoryProfile) {
        self.profiles
            .write()
            .unwrap()
            .insert(profile.id.clone(), profile);
    }

    /// How many times `get_current_user` was called
    pub fn current_user_calls(&self) -> u32 {
        *self.current_user_calls.read().unwrap()
    }

    /// How many times `get_profile` was called
    pub fn profile_calls(&self) -> u32 {
        *self.profile_calls.read().unwrap()
    }

    /// Friendships recorded via `add_friend_for_current`
    pub fn friends_added(&self) -> Vec<(String, String)> {
        self.friends_added.read().unwrap().clone()
    }

    /// Shared handle to the recorded friendships, for tests that hand the
    /// directory off before asserting
    pub fn friends_added_handle(&self) -> Arc<RwLock<Vec<(String, String)>>> {
        self.friends_added.clone()
    }

    fn fail_if_configured(&self) -> Result<(), DirectoryError> {
        if *self.should_fail.read().unwrap() {
            Err(DirectoryError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn get_users_by_name(&self, name: &str) -> Result<Vec<DirectoryUser>, DirectoryError> {
        self.fail_if_configured()?;

        let users = self.users.read().unwrap();
        Ok(users.iter().filter(|u| u.name == name).cloned().collect())
    }

    async fn get_profile(&self, id: &UserId) -> Result<DirectoryProfile, DirectoryError> {
        *self.profile_calls.write().unwrap() += 1;
        self.fail_if_configured()?;

        if self.failing_profiles.read().unwrap().contains(id.as_str()) {
            return Err(DirectoryError::Api {
                status: 500,
                message: format!("Mock profile failure for {}", id),
            });
        }

        let profiles = self.profiles.read().unwrap();
        profiles
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| DirectoryError::UserNotFound(id.to_string()))
    }

    async fn get_user_friends(&self, id: &UserId) -> Result<Vec<DirectoryUser>, DirectoryError> {
        self.fail_if_configured()?;

        let friends = self.friends.read().unwrap();
        Ok(friends.get(id.as_str()).cloned().unwrap_or_default())
    }

    async fn get_current_user(&self) -> Result<DirectoryUser, DirectoryError> {
        *self.current_user_calls.write().unwrap() += 1;
        self.fail_if_configured()?;

        self.current_user
            .read()
            .unwrap()
            .clone()
            .ok_or(DirectoryError::Unauthorized)
    }

    async fn add_friend_for_current(
        &self,
        user_id: &UserId,
        friend_id: &UserId,
    ) -> Result<(), DirectoryError> {
        self.fail_if_configured()?;

        if self.failing_adds.read().unwrap().contains(friend_id.as_str()) {
            return Err(DirectoryError::Api {
                status: 500,
                message: format!("Mock add failure for {}", friend_id),
            });
        }

        self.friends_added
            .write()
            .unwrap()
            .push((user_id.to_string(), friend_id.to_string()));
        Ok(())
    }
}
