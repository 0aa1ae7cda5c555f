//! Core entity definitions for the exercise tracker.
//!
//! This crate defines the records shared by the store and the server:
//! users, the exercise entries they log, and the opaque identifier both
//! are keyed by.

mod exercise;
mod object_id;
mod user;

pub use exercise::*;
pub use object_id::*;
pub use user::*;
