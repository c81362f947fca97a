use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid skill pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Empty vocabulary: documents contain only stop words")]
    EmptyVocabulary,

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Errors the scoring core resolves to a zero score instead of surfacing.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Error::EmptyVocabulary)
    }
}
