// passmith
//
// Clipboard handler

use arboard::Clipboard;
use thiserror::Error;

/// The system clipboard could not be reached. Recoverable: callers fall
/// back to showing the secret for manual copy.
#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardUnavailable(#[from] arboard::Error);

/// Places the secret on the system clipboard.
pub fn copy_to_clipboard(secret: &str) -> Result<(), ClipboardUnavailable> {
    let mut ctx = Clipboard::new()?;
    ctx.set_text(secret.to_owned())?;
    Ok(())
}

/// Copy with the fallback path applied: on clipboard failure the secret is
/// printed for manual selection and the failure is only logged. Returns
/// whether the clipboard path itself succeeded, so callers can word their
/// confirmation accordingly.
pub fn copy_with_fallback(secret: &str) -> bool {
    match copy_to_clipboard(secret) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("{e}");
            println!("Clipboard unavailable, copy manually: {secret}");
            false
        }
    }
}
