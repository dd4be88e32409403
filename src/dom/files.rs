// ============================================================================
// FILES - Read the files picked in an <input type="file">
// ============================================================================

use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

use crate::services::transport::FilePart;

/// Every selected file, in selection order. No selection gives an empty list.
pub async fn read_selected_files(input: &HtmlInputElement) -> Result<Vec<FilePart>, JsValue> {
    let Some(list) = input.files() else {
        return Ok(Vec::new());
    };

    let mut parts = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(file) = list.get(index) {
            parts.push(read_file(&file).await?);
        }
    }
    Ok(parts)
}

async fn read_file(file: &File) -> Result<FilePart, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    log::debug!("📎 Read {} ({} bytes)", file.name(), bytes.len());
    Ok(FilePart::new(file.name(), file.type_(), bytes))
}
