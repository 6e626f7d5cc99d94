use serde::{Deserialize, Serialize};

use crate::extract::{CodeElement, ElementKind};
use crate::languages::LanguageGrammar;
use crate::summary::models::schema_for_kind;

const SYSTEM_PROMPT: &str = "You are an expert programmer creating documentation.";

/// Minimal chat message for chat-completions payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Everything needed to ask the model about one element.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRequest {
    pub kind: ElementKind,
    pub name: String,
    pub messages: Vec<ChatMessage>,
    pub schema: serde_json::Value,
}

/// Renders per-kind prompt templates for one language.
pub struct RequestBuilder {
    language: String,
    fence_tag: String,
}

impl RequestBuilder {
    pub fn new(language: impl Into<String>, fence_tag: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            fence_tag: fence_tag.into(),
        }
    }

    pub fn for_grammar(grammar: &dyn LanguageGrammar) -> Self {
        Self::new(grammar.name(), grammar.fence_tag())
    }

    pub fn build(&self, element: &CodeElement) -> SummaryRequest {
        let schema = schema_for_kind(element.kind);
        let prompt = format!(
            "Analyze the following {language} {kind}.\n\
             Your response must be a JSON object that strictly follows the provided schema.\n\
             \n\
             {instructions}\n\
             \n\
             **Code to analyze:**\n\
             ```{fence}\n\
             {code}\n\
             ```\n",
            language = capitalize(&self.language),
            kind = element.kind,
            instructions = format_instructions(&schema),
            fence = self.fence_tag,
            code = element.source_text,
        );

        SummaryRequest {
            kind: element.kind,
            name: element.name.clone(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)],
            schema,
        }
    }
}

fn format_instructions(schema: &serde_json::Value) -> String {
    let rendered = serde_json::to_string_pretty(schema).unwrap_or_else(|_| schema.to_string());
    format!(
        "The output must be a single JSON instance that conforms to the JSON schema below. \
         Return only the JSON object, without commentary.\n\
         \n\
         Here is the output schema:\n\
         ```json\n\
         {}\n\
         ```",
        rendered
    )
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
