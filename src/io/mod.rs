//! Output helpers.
//!
//! - CSV export with the Downloads fallback (`export`)

pub mod export;

pub use export::*;
