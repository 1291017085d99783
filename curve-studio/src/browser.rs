//! Browser collaborators: blocking dialogs and file download

use curve_session::error::CurveResult;
use curve_session::export::DownloadSink;
#[cfg(target_arch = "wasm32")]
use curve_session::error::CurveError;

pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(message);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    tracing::warn!("{}", message);
}

/// Yes/no dialog. Outside the browser nothing can answer, so it is a no.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    let answer = web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false);

    #[cfg(not(target_arch = "wasm32"))]
    let answer = {
        tracing::warn!("No dialog available for: {}", message);
        false
    };

    answer
}

/// Hands a file to the browser through a Blob URL and a synthetic anchor click
pub struct BrowserDownload;

impl DownloadSink for BrowserDownload {
    fn deliver(&mut self, file_name: &str, mime: &str, contents: &str) -> CurveResult<()> {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::{JsCast, JsValue};
            use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

            let parts = js_sys::Array::new();
            parts.push(&JsValue::from_str(contents));

            let opts = BlobPropertyBag::new();
            opts.set_type(mime);
            let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)
                .map_err(|_| CurveError::Download("Failed to create blob".to_string()))?;
            let url = Url::create_object_url_with_blob(&blob)
                .map_err(|_| CurveError::Download("Unable to create download".to_string()))?;

            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or_else(|| CurveError::Download("Document unavailable".to_string()))?;
            let anchor: HtmlAnchorElement = document
                .create_element("a")
                .map_err(|_| CurveError::Download("Unable to create anchor".to_string()))?
                .dyn_into()
                .map_err(|_| CurveError::Download("Anchor cast failed".to_string()))?;
            anchor.set_href(&url);
            anchor.set_download(file_name);
            anchor.click();
            Url::revoke_object_url(&url).ok();

            tracing::info!("Download of {} started", file_name);
            Ok(())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::warn!(
                "Dropping {} ({}, {} bytes): downloads need a browser",
                file_name,
                mime,
                contents.len()
            );
            Ok(())
        }
    }
}
