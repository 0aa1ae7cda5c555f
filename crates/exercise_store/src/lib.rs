//! User and exercise storage for the exercise tracker
//!
//! This crate provides the document store the server talks to: a trait
//! exposing create/find/find-by-id over users and exercise entries, an
//! in-memory implementation, and a SQLite implementation.

mod error;
mod memory;
mod sqlite;
mod traits;

pub use error::*;
pub use memory::*;
pub use sqlite::*;
pub use traits::*;
