pub mod client;
pub mod coach;
pub mod config;
pub mod render;

pub use coach_core::{catalog, models};
