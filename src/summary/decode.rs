use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;

use crate::error::{Result, SummarizerError};
use crate::extract::ElementKind;
use crate::summary::models::{ClassSummary, ElementSummary, FunctionSummary};

static FENCED_BODY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*```[A-Za-z0-9_-]*[ \t]*\r?\n(.*?)\r?\n?[ \t]*```\s*$").expect("valid regex")
});

/// Decodes a model response into the summary type for `kind`.
pub fn decode_summary(kind: ElementKind, raw: &str) -> Result<ElementSummary> {
    let body = strip_code_fence(raw);
    match kind {
        ElementKind::Function => decode::<FunctionSummary>(kind, body).map(ElementSummary::Function),
        ElementKind::Class => decode::<ClassSummary>(kind, body).map(ElementSummary::Class),
    }
}

fn decode<T: DeserializeOwned>(kind: ElementKind, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        SummarizerError::SchemaDecode(format!(
            "response does not match the {} summary schema: {} (body={})",
            kind,
            e,
            truncate_for_error(body)
        ))
    })
}

/// Models sometimes wrap JSON in a markdown fence even in JSON mode.
fn strip_code_fence(raw: &str) -> &str {
    match FENCED_BODY.captures(raw).and_then(|c| c.get(1)) {
        Some(body) => body.as_str(),
        None => raw.trim(),
    }
}

pub(crate) fn truncate_for_error(value: &str) -> String {
    const LIMIT: usize = 400;
    if value.len() <= LIMIT {
        return value.to_string();
    }
    let mut end = LIMIT;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &value[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const FUNCTION_JSON: &str = r#"{
        "description": "Adds two numbers.",
        "parameters": [
            {"name": "a", "param_type": "int", "description": "First operand."},
            {"name": "b", "param_type": "int", "description": "Second operand."}
        ],
        "returns": "int: the sum.",
        "usage_example": "add(1, 2)"
    }"#;

    #[test]
    fn test_decode_function_summary() {
        let summary = decode_summary(ElementKind::Function, FUNCTION_JSON).unwrap();
        match summary {
            ElementSummary::Function(f) => {
                assert_eq!(f.description, "Adds two numbers.");
                assert_eq!(f.parameters.len(), 2);
                assert_eq!(f.parameters[1].param_type, "int");
            }
            other => panic!("expected function summary, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_class_summary() {
        let raw = r#"{"overall_description": "A point.", "initialization": "Point(x, y)",
                      "key_methods": ["norm(): length"], "usage_example": "Point(1, 2).norm()",
                      "extra": true}"#;
        let summary = decode_summary(ElementKind::Class, raw).unwrap();
        assert_eq!(summary.kind(), ElementKind::Class);
    }

    #[test]
    fn test_decode_strips_code_fence() {
        let raw = format!("```json\n{}\n```", FUNCTION_JSON);
        assert!(decode_summary(ElementKind::Function, &raw).is_ok());

        let bare = format!("  ```\n{}\n```  \n", FUNCTION_JSON);
        assert!(decode_summary(ElementKind::Function, &bare).is_ok());
    }

    #[test]
    fn test_decode_missing_field_is_schema_error() {
        let raw = r#"{"description": "x", "parameters": [], "usage_example": "f()"}"#;
        let err = decode_summary(ElementKind::Function, raw).err().unwrap();
        assert!(matches!(err, SummarizerError::SchemaDecode(_)));
        assert!(err.to_string().contains("returns"));
    }

    #[test]
    fn test_decode_type_mismatch_is_schema_error() {
        let raw = r#"{"overall_description": "x", "initialization": "y",
                      "key_methods": "not a list", "usage_example": "z"}"#;
        let err = decode_summary(ElementKind::Class, raw).err().unwrap();
        assert!(matches!(err, SummarizerError::SchemaDecode(_)));
    }

    #[test]
    fn test_decode_invalid_json_is_schema_error() {
        let err = decode_summary(ElementKind::Function, "Sure! Here is the summary").err().unwrap();
        assert!(matches!(err, SummarizerError::SchemaDecode(_)));
    }

    #[test]
    fn test_function_json_does_not_decode_as_class() {
        assert!(decode_summary(ElementKind::Class, FUNCTION_JSON).is_err());
    }

    #[test]
    fn test_truncate_for_error_respects_char_boundaries() {
        let long = "é".repeat(300);
        let truncated = truncate_for_error(&long);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 403);
        assert_eq!(truncate_for_error("short"), "short");
    }
}
