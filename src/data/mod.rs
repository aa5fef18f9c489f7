//! Remote data sources.
//!
//! - OpenFEMA declaration denials (`fema`)

pub mod fema;

pub use fema::*;
