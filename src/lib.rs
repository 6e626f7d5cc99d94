pub mod error;
pub mod extract;
pub mod languages;
pub mod report;
pub mod summary;

pub use error::{Result, SummarizerError};
pub use extract::{
    CodeElement, ElementExtractor, ElementKind, ExtractionResult, FileWalker, ParsedFile, Parser,
    SkippedDefinition, WalkOptions,
};
pub use languages::{LanguageGrammar, LanguageRegistry};
pub use report::{
    summarize_codebase, ReportAssembler, ReportDocument, RunOptions, RunOutcome, RunStats,
    REPORT_TITLE,
};
pub use summary::{
    ChatClient, ChatMessage, ClassSummary, CompletionProvider, ElementSummary, FunctionSummary,
    Parameter, ProviderConfig, RequestBuilder, Summarizer, SummaryRequest,
};

/// Extracts top-level elements from Python source text.
pub fn extract_python(source: &str) -> Result<ExtractionResult> {
    let registry = LanguageRegistry::new();
    let grammar = registry
        .get_by_name("python")
        .ok_or_else(|| SummarizerError::UnsupportedLanguage("python".to_string()))?;
    let parsed = Parser::new(registry).parse_source(source, grammar)?;
    Ok(ElementExtractor::new().extract(&parsed))
}
