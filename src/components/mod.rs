//! UI components built with Leptos.
//!
//! - [`Page`] - Main page layout (upload, entry list, viewer)
//! - [`entry_list`] - Loaded-entry browser
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`instructions`] - Stateless instructions overlay
//! - [`upload`] - File picker and drag-and-drop card
//! - [`viewer`] - Structure tree and raw content tabs

mod entry_list;
pub mod icons;
mod instructions;
mod page;
mod upload;
mod viewer;

pub use page::Page;
