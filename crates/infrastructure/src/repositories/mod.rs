//! Repository implementations for data persistence.
//!
//! SQLite-backed implementations of the storage ports defined in the
//! application layer.

mod score_repository;

pub use score_repository::*;
