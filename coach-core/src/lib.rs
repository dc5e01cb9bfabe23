//! Core data for the objection coach: the closed set of objection
//! categories, the locked script catalog, and the transient request types
//! used by the AI fallback.

pub mod catalog;
pub mod models;

pub use catalog::{lookup, lookup_label, plays};
pub use models::*;
