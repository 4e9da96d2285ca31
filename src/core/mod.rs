//! Core business logic for takeout processing.
//!
//! This module provides:
//! - [`decode`] per-format member decoders (JSON, assignment-wrapped, CSV)
//! - [`extract_entries`] archive/single-file extraction over in-memory bytes
//! - [`infer_shape`] and [`StructureReport`] structure inference and export

mod decode;
pub mod error;
mod extract;
mod structure;

pub use extract::extract_entries;
pub use structure::{StructureReport, infer_shape};
