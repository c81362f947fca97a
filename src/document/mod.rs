pub mod format;

use std::path::Path;

use crate::error::{Error, Result};

pub use format::{detect_format, DocumentFormat};

/// Reads the text of a document for scoring.
///
/// Never fails: unreadable or unsupported documents are logged and yield an
/// empty string, which the scorer treats as a blank document.
pub fn load_text<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    match try_load_text(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Error reading {}: {}", path.display(), e);
            String::new()
        }
    }
}

pub fn try_load_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let format = detect_format(path);
    if !format.is_text() {
        return Err(Error::UnsupportedFormat(format!(
            "{} ({}); export it to plain text first",
            path.display(),
            format
        )));
    }

    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes).trim().to_string();

    tracing::debug!("Loaded {} characters from {}", text.len(), path.display());
    Ok(text)
}
