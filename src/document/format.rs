use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentFormat {
    PlainText,
    Markdown,
    Html,
    Pdf,
    WordProcessor,
    Unknown,
}

impl DocumentFormat {
    /// Formats whose bytes are scored as-is. Markup formats would leak tag
    /// names into the extracted skills.
    pub fn is_text(&self) -> bool {
        matches!(self, DocumentFormat::PlainText | DocumentFormat::Markdown)
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::PlainText => write!(f, "Plain text"),
            DocumentFormat::Markdown => write!(f, "Markdown"),
            DocumentFormat::Html => write!(f, "HTML"),
            DocumentFormat::Pdf => write!(f, "PDF"),
            DocumentFormat::WordProcessor => write!(f, "Word processor"),
            DocumentFormat::Unknown => write!(f, "Unknown"),
        }
    }
}

pub fn detect_format<P: AsRef<Path>>(path: P) -> DocumentFormat {
    let path = path.as_ref();

    let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
        // Extensionless files such as README or stdin dumps are treated as text
        return DocumentFormat::PlainText;
    };

    let format_map: HashMap<&str, DocumentFormat> = [
        ("txt", DocumentFormat::PlainText),
        ("text", DocumentFormat::PlainText),
        ("log", DocumentFormat::PlainText),
        ("md", DocumentFormat::Markdown),
        ("markdown", DocumentFormat::Markdown),
        ("rst", DocumentFormat::PlainText),
        ("html", DocumentFormat::Html),
        ("htm", DocumentFormat::Html),
        ("pdf", DocumentFormat::Pdf),
        ("doc", DocumentFormat::WordProcessor),
        ("docx", DocumentFormat::WordProcessor),
        ("odt", DocumentFormat::WordProcessor),
        ("rtf", DocumentFormat::WordProcessor),
    ]
    .iter()
    .cloned()
    .collect();

    format_map
        .get(extension.to_lowercase().as_str())
        .copied()
        .unwrap_or(DocumentFormat::Unknown)
}
