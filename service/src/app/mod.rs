//! Application layer
//!
//! Caller-facing use cases composed from repository calls.

pub mod user_service;

pub use user_service::UserService;
