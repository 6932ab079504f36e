//! # avri_core
//!
//! Core domain logic for Avri.

pub mod charts;
pub mod dataset;
pub mod models;
pub mod queries;
pub mod reply;

pub use dataset::{Dataset, DatasetError};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
