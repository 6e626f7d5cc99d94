pub mod assembler;
pub mod document;
pub mod markdown;

pub use assembler::{summarize_codebase, ReportAssembler, RunOptions, RunOutcome, RunStats};
pub use document::{ReportDocument, REPORT_TITLE};
