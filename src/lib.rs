//! `fema-denials` library crate.
//!
//! The binary (`fema-to-csv`) is a thin wrapper around this library so that:
//!
//! - every pipeline stage is testable without spawning processes
//! - filesystem locations come from an explicit `RunContext`, never from
//!   ambient lookups inside the stages

pub mod app;
pub mod config;
pub mod convert;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod probe;
pub mod report;
