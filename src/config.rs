//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use crate::models::ArrayPolicy;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the page header.
pub const APP_NAME: &str = "Takeout Structure Explorer";

// =============================================================================
// File Handling
// =============================================================================

/// Path segment that marks an assignment-wrapped `.js` member as a data file.
///
/// Twitter-style takeouts ship their records as script files under a `data/`
/// directory; script members outside that directory are skipped silently.
pub const DATA_PATH_MARKER: &str = "/data/";

/// Name of the downloadable structure report.
pub const EXPORT_FILE_NAME: &str = "json_structure.json";

// =============================================================================
// Structure Inference
// =============================================================================

/// How non-empty arrays are summarized in a structure report.
///
/// `SampleFirst` matches the exported report of the original tool: an array
/// is represented by its first element's shape.
pub const ARRAY_POLICY: ArrayPolicy = ArrayPolicy::SampleFirst;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// External Links
// =============================================================================

/// Data-donation instructions page embedded in the instructions overlay.
pub const INSTRUCTIONS_URL: &str = "https://donation-instructions.what-if-horizon.eu/";
