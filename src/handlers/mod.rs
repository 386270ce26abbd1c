//! HTTP handlers for developer records.

pub mod developer;
pub use developer::*;
