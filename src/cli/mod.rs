mod commands;

pub use commands::{outline, summarize};

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "code-summarizer")]
#[command(about = "Summarize top-level functions and classes of a codebase with an LLM")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Summarize ./sample_codebase into output/summary_agentic.md using Groq
    code-summarizer summarize

    # Summarize a project with OpenAI and four parallel requests per file
    code-summarizer summarize ./src --provider openai --model gpt-4o-mini --concurrency 4

    # Point at a local OpenAI-compatible server
    code-summarizer summarize ./src --provider local --endpoint http://localhost:8080/v1

    # List the elements that would be summarized, without calling a model
    code-summarizer outline ./src
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize every top-level function and class into a markdown report
    Summarize(SummarizeArgs),

    /// List top-level functions and classes without calling a model
    Outline(WalkArgs),
}

#[derive(Args, Clone)]
pub struct WalkArgs {
    /// Directory to walk
    #[arg(default_value = "sample_codebase")]
    pub path: PathBuf,

    /// Include hidden files and directories
    #[arg(long)]
    pub hidden: bool,

    /// Do not honour .gitignore/.ignore files
    #[arg(long)]
    pub no_ignore: bool,
}

#[derive(Args, Clone)]
pub struct SummarizeArgs {
    #[command(flatten)]
    pub walk: WalkArgs,

    /// Where to write the markdown report
    #[arg(short, long, default_value = "output/summary_agentic.md")]
    pub output: PathBuf,

    /// Model provider: groq, openai or local
    #[arg(long, env = "CODE_SUMMARIZER_PROVIDER", default_value = "groq")]
    pub provider: String,

    /// Model name (defaults to the provider's default model)
    #[arg(long, env = "CODE_SUMMARIZER_MODEL")]
    pub model: Option<String>,

    /// OpenAI-compatible base URL (defaults to the provider's endpoint)
    #[arg(long, env = "CODE_SUMMARIZER_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Environment variable holding the API key (defaults per provider, e.g. GROQ_API_KEY)
    #[arg(long)]
    pub api_key_env: Option<String>,

    /// Sampling temperature
    #[arg(long, default_value_t = 0.2)]
    pub temperature: f32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 120)]
    pub timeout_secs: u64,

    /// Maximum concurrent model requests per file
    #[arg(long, default_value_t = 1)]
    pub concurrency: usize,
}
