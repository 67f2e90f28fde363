//! Domain entities
//!
//! Pure domain models, separate from the wire DTOs defined next to the
//! directory port.

pub mod user;

pub use user::{UserId, UserInfo};
