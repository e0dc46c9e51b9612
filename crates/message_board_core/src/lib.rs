//! Shared message board domain primitives.
//!
//! This crate owns the request/response contract of the read and write
//! handlers, the persisted record shape, and the table abstraction they
//! depend on. It intentionally excludes AWS SDK and Lambda runtime concerns.

pub mod body;
pub mod contract;
pub mod table;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;
