//! Directory DTO to domain model conversion
//!
//! Pure functions; the only failure mode is malformed input.

use crate::domain::entities::{UserId, UserInfo};
use crate::domain::ports::{DirectoryProfile, DirectoryUser};
use crate::error::DomainError;

/// Build the full domain view from a profile
///
/// Fails only when the wire value is malformed (a friend count outside
/// the non-negative range).
pub fn profile_to_info(profile: DirectoryProfile) -> Result<UserInfo, DomainError> {
    let friends_count = u32::try_from(profile.friends_count).map_err(|_| {
        DomainError::Validation(format!(
            "Profile {} has invalid friends count: {}",
            profile.id, profile.friends_count
        ))
    })?;

    Ok(UserInfo::Full {
        id: UserId(profile.id),
        name: profile.name,
        friends_count,
    })
}

/// Build the basic domain view from a bare user record
pub fn user_to_info(user: DirectoryUser) -> UserInfo {
    UserInfo::Basic {
        id: UserId(user.id),
        name: user.name,
    }
}
