//! Read user-picked files as data URIs.

#[cfg(test)]
#[path = "file_reader_test.rs"]
mod file_reader_test;

/// Read `file` with a `FileReader` and hand its data URI to `on_done`.
///
/// Read failures are logged and `on_done` is not called.
#[cfg(feature = "csr")]
pub fn read_as_data_url(file: &web_sys::File, on_done: impl FnOnce(String) + 'static) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let reader = match web_sys::FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            log::warn!("file_reader: FileReader unavailable: {e:?}");
            return;
        }
    };
    let source = reader.clone();
    let on_load_end = Closure::once_into_js(move |_: web_sys::ProgressEvent| {
        match source.result().ok().and_then(|value| value.as_string()) {
            Some(uri) => on_done(uri),
            None => log::warn!("file_reader: read finished without a data URI"),
        }
    });
    reader.set_onloadend(Some(on_load_end.unchecked_ref::<js_sys::Function>()));
    if let Err(e) = reader.read_as_data_url(file) {
        log::warn!("file_reader: read failed: {e:?}");
    }
}

/// Whether a picked file's MIME type can be used as an avatar.
pub fn is_image_type(mime: &str) -> bool {
    mime.starts_with("image/")
}
