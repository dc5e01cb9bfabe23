//! Domain models for the objection coach.
//!
//! # Core Concepts
//!
//! ## Locked Content
//!
//! - [`ObjectionCategory`]: One of the six objections the catalog answers.
//! - [`ResponsePlay`]: The four pre-authored scripts for a category. Fixed at
//!   compile time and never edited while the program runs.
//!
//! ## Per-Action Values
//!
//! These are built for one user action and dropped once it is rendered:
//!
//! - [`FallbackRequest`]: Free-text objection plus tone and model for the AI path.
//! - [`Tone`]: Style selector that only shapes the AI prompt.
//! - [`ViewFormat`]: Cosmetic display selector; never changes what is requested.

mod category;
mod play;
mod request;

pub use category::*;
pub use play::*;
pub use request::*;
