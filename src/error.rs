use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummarizerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Could not recover source for `{name}`: {reason}")]
    ExtractionFallback { name: String, reason: String },

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Schema decode error: {0}")]
    SchemaDecode(String),

    #[error("Initialization error: {0}")]
    Initialization(String),

    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),
}

pub type Result<T> = std::result::Result<T, SummarizerError>;
