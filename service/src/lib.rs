//! Circle service core
//!
//! User/profile/friends use cases over a remote user directory, in a
//! hexagonal (ports & adapters) layout:
//! - `domain`: entities and port traits
//! - `adapters`: directory HTTP client, DTO mapping, repository
//! - `app`: the caller-facing user service

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;


pub use app::UserService;
pub use config::Config;
pub use domain::entities::{UserId, UserInfo};
pub use error::{DirectoryError, DomainError};
