//! User domain entity
//!
//! The domain-side view of a user, mapped from directory DTOs.

use serde::{Deserialize, Serialize};

/// Unique identifier for a user - opaque, assigned by the directory
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user as the rest of the application sees one
///
/// `Full` is backed by a profile lookup. `Basic` is what remains when only
/// the directory listing for the user is known - no friend count available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum UserInfo {
    Full {
        id: UserId,
        name: String,
        friends_count: u32,
    },
    Basic {
        id: UserId,
        name: String,
    },
}

impl UserInfo {
    pub fn id(&self) -> &UserId {
        match self {
            UserInfo::Full { id, .. } | UserInfo::Basic { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            UserInfo::Full { name, .. } | UserInfo::Basic { name, .. } => name,
        }
    }

    /// Friend count, if a full profile backed this view
    pub fn friends_count(&self) -> Option<u32> {
        match self {
            UserInfo::Full { friends_count, .. } => Some(*friends_count),
            UserInfo::Basic { .. } => None,
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, UserInfo::Full { .. })
    }
}
