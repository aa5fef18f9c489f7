//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the opaque denial record (`DenialRecord`) and the date fields we recognise
//! - the rectangular `Table` handed from the converter to the writer

pub mod types;

pub use types::*;
