//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod directory;
pub mod users;

pub use directory::{DirectoryProfile, DirectoryUser, UserDirectory};
pub use users::UserRepository;
