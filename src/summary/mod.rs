pub mod chat_client;
pub mod config;
pub mod decode;
pub mod models;
pub mod provider;
pub mod request;

pub use chat_client::{ChatClient, ChatCompletion, ChatUsage};
pub use config::ProviderConfig;
pub use decode::decode_summary;
pub use models::{schema_for_kind, ClassSummary, ElementSummary, FunctionSummary, Parameter};
pub use provider::{CompletionProvider, Summarizer};
pub use request::{ChatMessage, RequestBuilder, SummaryRequest};
