//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`TakeoutEntry`], [`SourceKind`], [`MemberKind`] - Decoded takeout content
//!   and extension-based format dispatch
//! - [`ShapeDescriptor`], [`ArrayPolicy`] - Privacy-scrubbed structure summaries

mod entry;
mod shape;

pub use entry::{MemberKind, SourceKind, TakeoutEntry};
pub use shape::{ArrayPolicy, ShapeDescriptor};
