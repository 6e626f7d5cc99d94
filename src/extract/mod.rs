pub mod element;
pub mod extractor;
pub mod parser;
pub mod walker;

pub use element::{CodeElement, ElementKind};
pub use extractor::{ElementExtractor, ExtractionResult, SkippedDefinition};
pub use parser::{ParsedFile, Parser};
pub use walker::{FileWalker, WalkOptions};

use std::path::Path;

use crate::error::Result;
use crate::languages::LanguageRegistry;

/// Reads, parses and extracts one file.
pub fn extract_file(path: &Path) -> Result<ExtractionResult> {
    let parser = Parser::new(LanguageRegistry::new());
    let parsed = parser.parse_file(path)?;
    Ok(ElementExtractor::new().extract(&parsed))
}
