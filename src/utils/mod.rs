//! Utility modules for web, DOM, and diagnostics.
//!
//! Provides:
//! - [`console`] - Console logging that degrades to stderr in native tests
//! - [`dom`] - Window access and the Blob-based file download
//! - [`file`] - Async reading of a browser `File` into memory

pub mod console;
pub mod dom;
pub mod file;
