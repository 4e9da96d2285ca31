//! Browser file reading.

use js_sys::Uint8Array;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use crate::core::error::LoadError;

/// Read the full contents of a browser `File` into memory.
///
/// Suspends on the `arrayBuffer()` promise; the whole file is held in
/// memory (streaming is an explicit non-goal).
pub async fn read_file_bytes(file: &File) -> Result<Vec<u8>, LoadError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| LoadError::FileRead)?;
    Ok(Uint8Array::new(&buffer).to_vec())
}
