//! Prelude module for the weekday_range crate.
//!
//! Re-exports the derive_more macros used across the crate.

#[allow(unused_imports)]
pub use derive_more::{Deref, Display, Into};
