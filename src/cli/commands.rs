use std::time::Duration;

use code_summarizer::error::Result;
use code_summarizer::extract::{ElementExtractor, FileWalker, Parser, WalkOptions};
use code_summarizer::languages::LanguageRegistry;
use code_summarizer::report::{summarize_codebase, RunOptions, RunOutcome};
use code_summarizer::summary::ProviderConfig;

use super::{SummarizeArgs, WalkArgs};

fn walk_options(args: &WalkArgs) -> WalkOptions {
    WalkOptions {
        include_hidden: args.hidden,
        respect_ignore: !args.no_ignore,
    }
}

fn provider_config(args: &SummarizeArgs) -> Result<ProviderConfig> {
    let mut config = ProviderConfig::for_provider(&args.provider)?
        .with_temperature(args.temperature)
        .with_timeout(Duration::from_secs(args.timeout_secs));
    if let Some(model) = &args.model {
        config = config.with_model(model);
    }
    if let Some(endpoint) = &args.endpoint {
        config = config.with_endpoint(endpoint);
    }
    if let Some(name) = &args.api_key_env {
        config = config.with_api_key_env(name);
    }
    Ok(config.load_api_key_from_env())
}

/// Runs the full pipeline. Initialization failures are reported and end the
/// command without writing a report.
pub async fn summarize(args: SummarizeArgs) -> Result<()> {
    println!(
        "Starting code summarization for codebase: '{}'",
        args.walk.path.display()
    );

    let options = RunOptions {
        walk: walk_options(&args.walk),
        concurrency: args.concurrency.max(1),
        print_progress: true,
    };
    let outcome = match provider_config(&args) {
        Ok(config) => summarize_codebase(config, options, &args.walk.path, &args.output).await?,
        Err(e) => RunOutcome::NotStarted(e),
    };

    match outcome {
        RunOutcome::NotStarted(e) => {
            eprintln!("Failed to initialize the summarizer. Error: {}", e);
        }
        RunOutcome::Completed(stats) => {
            println!("\nSummarization complete!");
            println!(
                "{} files ({} failed), {} elements summarized, {} failed, {} skipped",
                stats.files_total,
                stats.files_failed,
                stats.elements_summarized,
                stats.elements_failed,
                stats.elements_skipped
            );
            println!("✅ Output saved to: {}", args.output.display());
        }
    }

    Ok(())
}

pub fn outline(args: WalkArgs) -> Result<()> {
    let walker = FileWalker::with_options(LanguageRegistry::new(), walk_options(&args));
    let parser = Parser::new(LanguageRegistry::new());
    let extractor = ElementExtractor::new();

    let files = walker.walk(&args.path)?;
    println!("Found {} files", files.len());

    for file in &files {
        println!("\n{}", file.display());
        match parser.parse_file(file) {
            Ok(parsed) => {
                let result = extractor.extract(&parsed);
                for element in &result.elements {
                    println!(
                        "  {:<8} {} (lines {}-{})",
                        element.kind, element.name, element.start_line, element.end_line
                    );
                }
                for skipped in &result.skipped {
                    println!("  skipped  line {}: {}", skipped.line, skipped.error);
                }
            }
            Err(e) => println!("  error    {}", e),
        }
    }

    Ok(())
}
