use std::future::Future;

use tracing::debug;

use crate::error::Result;
use crate::summary::decode::decode_summary;
use crate::summary::models::ElementSummary;
use crate::summary::request::SummaryRequest;

/// A hosted model that turns a rendered request into raw response text.
///
/// Errors are expected to be [`SummarizerError::Provider`](crate::SummarizerError::Provider).
pub trait CompletionProvider {
    fn complete(&self, request: &SummaryRequest) -> impl Future<Output = Result<String>>;
}

impl<P: CompletionProvider + ?Sized> CompletionProvider for &P {
    fn complete(&self, request: &SummaryRequest) -> impl Future<Output = Result<String>> {
        (**self).complete(request)
    }
}

/// Sends requests through a provider and decodes the answers.
pub struct Summarizer<P> {
    provider: P,
}

impl<P: CompletionProvider> Summarizer<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// One call, no retries.
    pub async fn summarize(&self, request: &SummaryRequest) -> Result<ElementSummary> {
        debug!(name = %request.name, kind = %request.kind, "requesting summary");
        let raw = self.provider.complete(request).await?;
        decode_summary(request.kind, &raw)
    }
}
