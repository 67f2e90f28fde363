//! Test utilities
//!
//! Manual in-memory mock of the directory port plus entity fixtures.
//! Manual mocks keep failure injection and call counting explicit, with
//! no macro indirection to debug through.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
