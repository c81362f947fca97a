use once_cell::sync::Lazy;
use regex::Regex;

static NON_TEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s.\-]").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Canonical single-line form of `text`.
///
/// Characters other than word characters, whitespace, `.` and `-` become
/// spaces, whitespace runs collapse to one space and the ends are trimmed.
/// `normalize(&normalize(t)) == normalize(t)` for every `t`.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let replaced = NON_TEXT.replace_all(text, " ");
    WHITESPACE.replace_all(&replaced, " ").trim().to_string()
}

pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

/// Raw document text with its derived forms computed on demand.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    raw: &'a str,
}

impl<'a> Document<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn normalized(&self) -> String {
        normalize(self.raw)
    }

    /// Lowercased normalized text, the haystack for skill matching.
    pub fn match_text(&self) -> String {
        self.normalized().to_lowercase()
    }

    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_and_strips() {
        assert_eq!(
            normalize("  Python,\tSQL &\n\nNode.js  (back-end)! "),
            "Python SQL Node.js back-end"
        );
    }

    #[test]
    fn test_normalize_keeps_dots_dashes_and_underscores() {
        assert_eq!(normalize("scikit-learn v1.2 snake_case"), "scikit-learn v1.2 snake_case");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
        assert_eq!(normalize("!!! ??? ///"), "");
        assert_eq!(normalize_opt(None), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "",
            "C++ / C# developer; CI/CD pipelines",
            "  multiple   spaces\r\nand\tnewlines ",
            "Ünïcödé café, naïve résumé",
            "--- ... -.-",
            "email: jane@example.com | phone: +1 (555) 010-9999",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_document_match_text() {
        let doc = Document::new("Loves PYTHON & Rust");
        assert_eq!(doc.match_text(), "loves python rust");
        assert!(!doc.is_blank());
        assert!(Document::new(" \n ").is_blank());
    }
}
