//! Markdown rendering for report sections.

use std::path::Path;

use crate::error::SummarizerError;
use crate::extract::{ElementKind, SkippedDefinition};
use crate::summary::{ClassSummary, ElementSummary, FunctionSummary};

pub const SECTION_SEPARATOR: &str = "\n\n---\n\n";
pub const NO_PARAMETERS: &str = "- This function takes no parameters.";
pub const NO_KEY_METHODS: &str = "- No public methods listed.";

pub fn file_heading(path: &Path) -> String {
    format!("## File: `{}`\n\n", path.display())
}

pub fn format_function(summary: &FunctionSummary, name: &str, fence: &str) -> String {
    let parameters = if summary.parameters.is_empty() {
        format!("{}\n", NO_PARAMETERS)
    } else {
        summary
            .parameters
            .iter()
            .map(|p| format!("- `{}` ({}): {}\n", p.name, p.param_type, p.description))
            .collect()
    };

    format!(
        "### Function: `{}`\n\n\
         **Description:**\n{}\n\n\
         **Parameters:**\n{}\n\
         **Returns:**\n{}\n\n\
         {}",
        name,
        summary.description,
        parameters,
        summary.returns,
        usage_example(fence, &summary.usage_example)
    )
}

pub fn format_class(summary: &ClassSummary, name: &str, fence: &str) -> String {
    let methods = if summary.key_methods.is_empty() {
        format!("{}\n", NO_KEY_METHODS)
    } else {
        summary
            .key_methods
            .iter()
            .map(|m| format!("- {}\n", m))
            .collect()
    };

    format!(
        "### Class: `{}`\n\n\
         **Overall Description:**\n{}\n\n\
         **Initialization:**\n{}\n\n\
         **Key Methods:**\n{}\n\
         {}",
        name,
        summary.overall_description,
        summary.initialization,
        methods,
        usage_example(fence, &summary.usage_example)
    )
}

fn usage_example(fence: &str, example: &str) -> String {
    format!("**Usage Example:**\n```{}\n{}\n```", fence, example.trim_end())
}

/// Full section for a summarised element, separator included.
pub fn summary_section(summary: &ElementSummary, name: &str, fence: &str) -> String {
    let body = match summary {
        ElementSummary::Function(f) => format_function(f, name, fence),
        ElementSummary::Class(c) => format_class(c, name, fence),
    };
    body + SECTION_SEPARATOR
}

/// Placeholder section for an element whose summary could not be produced.
pub fn element_error_section(kind: ElementKind, name: &str, error: &SummarizerError) -> String {
    format!(
        "### {}: `{}`\n\n**Error generating summary:**\n```\n{}\n```{}",
        kind.label(),
        name,
        error,
        SECTION_SEPARATOR
    )
}

/// Note for a definition the extractor had to skip.
pub fn skipped_element_section(skipped: &SkippedDefinition) -> String {
    format!(
        "**Skipped definition (line {}):**\n```\n{}\n```{}",
        skipped.line, skipped.error, SECTION_SEPARATOR
    )
}

pub fn file_error_section(path: &Path, error: &SummarizerError) -> String {
    format!(
        "**Error processing this file:**\n```\nCould not process file {}. Error: {}\n```\n",
        path.display(),
        error
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::Parameter;

    fn function(parameters: Vec<Parameter>) -> FunctionSummary {
        FunctionSummary {
            description: "Adds two numbers.".to_string(),
            parameters,
            returns: "int: the sum.".to_string(),
            usage_example: "add(1, 2)\n".to_string(),
        }
    }

    #[test]
    fn test_format_function_with_parameters() {
        let summary = function(vec![
            Parameter {
                name: "a".to_string(),
                param_type: "int".to_string(),
                description: "First operand.".to_string(),
            },
            Parameter {
                name: "b".to_string(),
                param_type: "int".to_string(),
                description: "Second operand.".to_string(),
            },
        ]);

        let md = format_function(&summary, "add", "python");
        let expected = "### Function: `add`\n\n\
                        **Description:**\nAdds two numbers.\n\n\
                        **Parameters:**\n\
                        - `a` (int): First operand.\n\
                        - `b` (int): Second operand.\n\
                        \n**Returns:**\nint: the sum.\n\n\
                        **Usage Example:**\n```python\nadd(1, 2)\n```";
        assert_eq!(md, expected);
    }

    #[test]
    fn test_format_function_without_parameters_uses_placeholder() {
        let md = format_function(&function(vec![]), "now", "python");
        assert!(md.contains("**Parameters:**\n- This function takes no parameters.\n\n**Returns:**"));
    }

    #[test]
    fn test_format_class() {
        let summary = ClassSummary {
            overall_description: "Holds data.".to_string(),
            initialization: "Analyzer(data)".to_string(),
            key_methods: vec!["mean(): average".to_string(), "std(): deviation".to_string()],
            usage_example: "Analyzer([1, 2]).mean()".to_string(),
        };

        let md = format_class(&summary, "Analyzer", "python");
        assert!(md.starts_with("### Class: `Analyzer`\n\n**Overall Description:**\nHolds data.\n\n"));
        assert!(md.contains("**Initialization:**\nAnalyzer(data)\n\n"));
        assert!(md.contains("**Key Methods:**\n- mean(): average\n- std(): deviation\n\n**Usage Example:**"));
        assert!(md.ends_with("```python\nAnalyzer([1, 2]).mean()\n```"));
    }

    #[test]
    fn test_format_class_without_methods() {
        let summary = ClassSummary {
            overall_description: "Marker.".to_string(),
            initialization: "Marker()".to_string(),
            key_methods: vec![],
            usage_example: "Marker()".to_string(),
        };
        assert!(format_class(&summary, "Marker", "python").contains(NO_KEY_METHODS));
    }

    #[test]
    fn test_summary_section_appends_separator() {
        let section = summary_section(&ElementSummary::Function(function(vec![])), "f", "python");
        assert!(section.ends_with("```\n\n---\n\n"));
    }

    #[test]
    fn test_element_error_section() {
        let err = SummarizerError::Provider("HTTP 429".to_string());
        let section = element_error_section(ElementKind::Class, "Cache", &err);
        assert_eq!(
            section,
            "### Class: `Cache`\n\n**Error generating summary:**\n```\nProvider error: HTTP 429\n```\n\n---\n\n"
        );
    }

    #[test]
    fn test_skipped_element_section() {
        let skipped = SkippedDefinition {
            line: 12,
            error: SummarizerError::ExtractionFallback {
                name: "<anonymous function>".to_string(),
                reason: "definition has no name".to_string(),
            },
        };
        assert_eq!(
            skipped_element_section(&skipped),
            "**Skipped definition (line 12):**\n```\n\
             Could not recover source for `<anonymous function>`: definition has no name\n\
             ```\n\n---\n\n"
        );
    }

    #[test]
    fn test_file_error_section() {
        let err = SummarizerError::Parse("invalid syntax at line 3, column 1".to_string());
        let section = file_error_section(Path::new("pkg/bad.py"), &err);
        assert!(section.starts_with("**Error processing this file:**\n```\n"));
        assert!(section.contains("Could not process file pkg/bad.py. Error: Parse error: invalid syntax"));
    }

    #[test]
    fn test_file_heading() {
        assert_eq!(file_heading(Path::new("src/a.py")), "## File: `src/a.py`\n\n");
    }
}
