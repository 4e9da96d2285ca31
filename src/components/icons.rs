//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuDownload as Download, LuFile as File, LuFileArchive as Archive,
        LuFileText as FileText, LuInfo as Info, LuUpload as Upload, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsDownload as Download, BsFileEarmark as File, BsFileEarmarkText as FileText,
        BsFileZip as Archive, BsInfoCircle as Info, BsUpload as Upload, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(UPLOAD, Upload);
themed_icon!(DOWNLOAD, Download);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(ARCHIVE, Archive);
themed_icon!(INFO, Info);
themed_icon!(CLOSE, Close);
