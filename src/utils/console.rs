//! Console logging helpers.
//!
//! In the browser these forward to the devtools console; in native test
//! builds they fall back to stdio so per-member diagnostics stay visible.

/// Log an informational message.
#[allow(dead_code)]
pub fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    println!("{message}");
}

/// Log a warning.
pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{message}");
}
