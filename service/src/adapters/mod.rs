//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod directory;

pub use directory::{DirectoryUserRepository, HttpUserDirectory};
