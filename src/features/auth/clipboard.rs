//! Clipboard writes with a legacy fallback. The async Clipboard API is used
//! when the host exposes it; otherwise the text goes through a scratch input
//! and `execCommand("copy")`. The scratch element is removed even when the
//! copy command itself fails. Rejections are returned as errors and must be
//! surfaced by the caller, never swallowed.

use crate::app_lib::AppError;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlDocument, HtmlInputElement};

/// Places `text` on the system clipboard.
pub async fn copy_text(text: &str) -> Result<(), AppError> {
    let window = web_sys::window()
        .ok_or_else(|| AppError::Clipboard("No window available".to_string()))?;

    let clipboard = window.navigator().clipboard();
    if clipboard.is_undefined() {
        let document = window
            .document()
            .ok_or_else(|| AppError::Clipboard("No document available".to_string()))?;
        return fallback_copy(&document, text);
    }

    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|err| AppError::Clipboard(format!("Clipboard write rejected: {err:?}")))
}

/// Offscreen input that removes itself when dropped.
struct ScratchInput {
    input: HtmlInputElement,
}

impl ScratchInput {
    fn create(document: &Document, text: &str) -> Result<Self, AppError> {
        let element = document
            .create_element("input")
            .map_err(|err| AppError::Clipboard(format!("Failed to create scratch input: {err:?}")))?;
        let input: HtmlInputElement = element
            .dyn_into()
            .map_err(|_| AppError::Clipboard("Scratch element is not an input".to_string()))?;
        input.set_value(text);

        let body = document
            .body()
            .ok_or_else(|| AppError::Clipboard("Document has no body".to_string()))?;
        body.append_child(&input)
            .map_err(|err| AppError::Clipboard(format!("Failed to attach scratch input: {err:?}")))?;

        Ok(Self { input })
    }

    fn select(&self) {
        self.input.select();
    }
}

impl Drop for ScratchInput {
    fn drop(&mut self) {
        self.input.remove();
    }
}

fn fallback_copy(document: &Document, text: &str) -> Result<(), AppError> {
    let scratch = ScratchInput::create(document, text)?;
    scratch.select();

    let html_document: &HtmlDocument = document
        .dyn_ref()
        .ok_or_else(|| AppError::Clipboard("Document does not support execCommand".to_string()))?;
    let copied = html_document
        .exec_command("copy")
        .map_err(|err| AppError::Clipboard(format!("execCommand copy failed: {err:?}")))?;

    if copied {
        Ok(())
    } else {
        Err(AppError::Clipboard(
            "execCommand copy was refused".to_string(),
        ))
    }
}
