use arboard::Clipboard;
use tracing::debug;

/// Copies text to the system clipboard.
///
/// Returns an error message when no clipboard is available, for example on a
/// headless terminal.
pub fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let mut clipboard =
        Clipboard::new().map_err(|e| format!("Failed to access clipboard: {}", e))?;

    clipboard
        .set_text(text.to_string())
        .map_err(|e| format!("Failed to copy to clipboard: {}", e))?;

    debug!(len = text.len(), "copied display to clipboard");
    Ok(())
}
