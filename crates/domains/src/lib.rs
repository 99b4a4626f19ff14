//! overboard/crates/domains/src/lib.rs
//!
//! The central domain types for Overboard: entities, identifiers, the
//! reputation policy and the error types every layer shares.
//! Nothing in this crate performs I/O.

pub mod error;
pub mod ids;
pub mod models;
pub mod reputation;
pub mod votable;

// Re-exporting for easier access in other crates
pub use error::*;
pub use ids::*;
pub use models::*;
pub use reputation::*;
pub use votable::*;
