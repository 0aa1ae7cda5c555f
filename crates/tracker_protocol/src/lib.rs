//! HTTP wire types for the exercise tracker
//!
//! This crate defines the request bodies, query strings, response bodies and
//! error payloads exchanged with the exercise tracker server.

mod error;
pub mod requests;
pub mod responses;
mod types;

pub use error::*;
pub use types::*;
