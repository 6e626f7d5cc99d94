use std::path::Path;

use futures::stream::{self, StreamExt};
use tracing::{error, info};

use crate::error::{Result, SummarizerError};
use crate::extract::{ElementExtractor, FileWalker, Parser, WalkOptions};
use crate::languages::LanguageRegistry;
use crate::report::document::ReportDocument;
use crate::report::markdown;
use crate::summary::{ChatClient, CompletionProvider, ProviderConfig, RequestBuilder, Summarizer};

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub walk: WalkOptions,
    /// Upper bound on in-flight model calls within one file.
    pub concurrency: usize,
    /// Print per-file and per-element progress lines to stdout.
    pub print_progress: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            walk: WalkOptions::default(),
            concurrency: 1,
            print_progress: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub files_total: usize,
    pub files_failed: usize,
    pub elements_summarized: usize,
    pub elements_failed: usize,
    pub elements_skipped: usize,
}

/// How a `summarize_codebase` call ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The provider client could not be set up. No report was written.
    NotStarted(SummarizerError),
    Completed(RunStats),
}

/// Sets up the chat client for `config` and writes the report for `root` to
/// `output`.
///
/// A client that fails to initialize ends the run with
/// [`RunOutcome::NotStarted`] rather than an error, so callers can report it
/// and exit cleanly. Walk and write failures are still errors.
pub async fn summarize_codebase(
    config: ProviderConfig,
    options: RunOptions,
    root: &Path,
    output: &Path,
) -> Result<RunOutcome> {
    let client = match ChatClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            error!("failed to initialize the summarizer: {}", e);
            return Ok(RunOutcome::NotStarted(e));
        }
    };

    let assembler = ReportAssembler::new(client, options);
    if !assembler.summarizer.provider().has_api_key() {
        assembler.progress(format_args!(
            "{} environment variable not set. Requests will likely fail.",
            assembler.summarizer.provider().config().api_key_env
        ));
    }

    let stats = assembler.run(root, output).await?;
    Ok(RunOutcome::Completed(stats))
}

/// Drives walk → extract → request → summarize → format for a directory.
pub struct ReportAssembler<P> {
    summarizer: Summarizer<P>,
    options: RunOptions,
    registry: LanguageRegistry,
}

impl<P: CompletionProvider> ReportAssembler<P> {
    pub fn new(provider: P, options: RunOptions) -> Self {
        Self {
            summarizer: Summarizer::new(provider),
            options,
            registry: LanguageRegistry::new(),
        }
    }

    pub fn with_registry(mut self, registry: LanguageRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Builds the report and writes it to `output` once every file is done.
    pub async fn run(&self, root: &Path, output: &Path) -> Result<RunStats> {
        let (document, stats) = self.build_report(root).await?;
        document.write_to(output)?;
        info!(
            output = %output.display(),
            files = stats.files_total,
            summarized = stats.elements_summarized,
            failed = stats.elements_failed,
            "report written"
        );
        Ok(stats)
    }

    pub async fn build_report(&self, root: &Path) -> Result<(ReportDocument, RunStats)> {
        let walker = FileWalker::with_options(self.registry.clone(), self.options.walk);
        let parser = Parser::new(self.registry.clone());
        let extractor = ElementExtractor::new();

        let files = walker.walk(root)?;
        info!(root = %root.display(), files = files.len(), "starting summarization");

        let mut document = ReportDocument::new();
        let mut stats = RunStats {
            files_total: files.len(),
            ..RunStats::default()
        };

        for file in &files {
            self.progress(format_args!("\nProcessing file: {}", file.display()));
            document.push(markdown::file_heading(file));

            let parsed = match parser.parse_file(file) {
                Ok(parsed) => parsed,
                Err(e) => {
                    error!(file = %file.display(), "could not process file: {}", e);
                    self.progress(format_args!("   -> ERROR: Could not process file {}. Error: {}", file.display(), e));
                    document.push(markdown::file_error_section(file, &e));
                    stats.files_failed += 1;
                    continue;
                }
            };

            let extraction = extractor.extract(&parsed);
            if extraction.elements.is_empty() {
                self.progress(format_args!(" -> No functions or classes found."));
            } else {
                self.progress(format_args!(
                    " -> Found {} elements. Generating summaries...",
                    extraction.elements.len()
                ));
            }

            let builder = RequestBuilder::for_grammar(parsed.grammar.as_ref());
            let fence = parsed.grammar.fence_tag();

            let outcomes: Vec<_> = stream::iter(extraction.elements.iter().map(|element| {
                let request = builder.build(element);
                async move {
                    self.progress(format_args!("   -> Generating summary for `{}`...", request.name));
                    self.summarizer.summarize(&request).await
                }
            }))
            .buffered(self.options.concurrency.max(1))
            .collect()
            .await;

            // Skipped definitions go in at their own position in the file.
            let mut skipped = extraction.skipped.iter().peekable();
            for (element, outcome) in extraction.elements.iter().zip(outcomes) {
                while let Some(entry) = skipped.next_if(|s| s.line < element.start_line) {
                    document.push(markdown::skipped_element_section(entry));
                    stats.elements_skipped += 1;
                }
                match outcome {
                    Ok(summary) => {
                        document.push(markdown::summary_section(&summary, &element.name, fence));
                        stats.elements_summarized += 1;
                    }
                    Err(e) => {
                        error!(
                            file = %file.display(),
                            element = %element.name,
                            "summary failed: {}",
                            e
                        );
                        self.progress(format_args!("   -> ERROR: `{}`: {}", element.name, e));
                        document.push(markdown::element_error_section(element.kind, &element.name, &e));
                        stats.elements_failed += 1;
                    }
                }
            }

            for entry in skipped {
                document.push(markdown::skipped_element_section(entry));
                stats.elements_skipped += 1;
            }
        }

        Ok((document, stats))
    }

    fn progress(&self, line: std::fmt::Arguments<'_>) {
        if self.options.print_progress {
            println!("{}", line);
        }
    }
}
