//! User directory adapter
//!
//! HTTP client for the directory API, DTO-to-domain mapping, and the
//! directory-backed repository.

pub mod client;
pub mod mapper;
pub mod user_repo;

pub use client::HttpUserDirectory;
pub use user_repo::DirectoryUserRepository;
