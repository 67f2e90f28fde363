//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::ports::{DirectoryProfile, DirectoryUser};

/// Create a directory user record
pub fn test_user(id: &str, name: &str) -> DirectoryUser {
    DirectoryUser {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// Create a directory profile record
pub fn test_profile(id: &str, name: &str, friends_count: i64) -> DirectoryProfile {
    DirectoryProfile {
        id: id.to_string(),
        name: name.to_string(),
        friends_count,
        is_student: false,
    }
}
