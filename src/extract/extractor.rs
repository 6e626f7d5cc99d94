use tracing::warn;

use crate::error::SummarizerError;
use crate::extract::element::{CodeElement, ElementKind};
use crate::extract::parser::ParsedFile;

/// A definition the extractor could not turn into an element.
#[derive(Debug)]
pub struct SkippedDefinition {
    /// 1-based line where the definition starts.
    pub line: u32,
    pub error: SummarizerError,
}

/// Elements recovered from one file plus the definitions that had to be skipped.
/// Both lists are in file order.
#[derive(Debug, Default)]
pub struct ExtractionResult {
    pub elements: Vec<CodeElement>,
    pub skipped: Vec<SkippedDefinition>,
}

pub struct ElementExtractor;

impl ElementExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Collects top-level function and class definitions in file order.
    ///
    /// Only direct children of the module node are considered, so methods and
    /// inner functions stay inside their parent's `source_text`.
    pub fn extract(&self, parsed: &ParsedFile) -> ExtractionResult {
        let mut result = ExtractionResult::default();
        let grammar = &parsed.grammar;
        let root = parsed.root_node();

        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            let (definition, span_node) = if Some(child.kind()) == grammar.decorated_kind() {
                match child.child_by_field_name(grammar.decorated_field()) {
                    Some(def) => (def, child),
                    None => continue,
                }
            } else {
                (child, child)
            };

            let kind = if grammar.function_kinds().contains(&definition.kind()) {
                ElementKind::Function
            } else if grammar.class_kinds().contains(&definition.kind()) {
                ElementKind::Class
            } else {
                continue;
            };

            match self.element_from_node(parsed, kind, &definition, &span_node) {
                Ok(element) => result.elements.push(element),
                Err(error) => {
                    let line = span_node.start_position().row as u32 + 1;
                    warn!(line, "Skipping {}: {}", kind, error);
                    result.skipped.push(SkippedDefinition { line, error });
                }
            }
        }

        result
    }

    fn element_from_node(
        &self,
        parsed: &ParsedFile,
        kind: ElementKind,
        definition: &tree_sitter::Node,
        span_node: &tree_sitter::Node,
    ) -> Result<CodeElement, SummarizerError> {
        let name = definition
            .child_by_field_name("name")
            .map(|n| parsed.node_text(&n))
            .filter(|n| !n.is_empty())
            .ok_or_else(|| SummarizerError::ExtractionFallback {
                name: format!("<anonymous {}>", kind),
                reason: "definition has no name".to_string(),
            })?;

        let source_text = recover_span(&parsed.source, span_node).ok_or_else(|| {
            SummarizerError::ExtractionFallback {
                name: name.to_string(),
                reason: format!(
                    "neither byte range {:?} nor rows {}..{} map onto the source",
                    span_node.byte_range(),
                    span_node.start_position().row + 1,
                    span_node.end_position().row + 1
                ),
            }
        })?;

        Ok(CodeElement::new(kind, name, source_text).with_lines(
            span_node.start_position().row as u32 + 1,
            span_node.end_position().row as u32 + 1,
        ))
    }
}

impl Default for ElementExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Slices the node's span out of the original text: byte range first, then
/// row/column positions over the source lines.
fn recover_span(source: &str, node: &tree_sitter::Node) -> Option<String> {
    source
        .get(node.byte_range())
        .map(str::to_string)
        .or_else(|| segment_from_points(source, node.start_position(), node.end_position()))
}

/// Row/column based segment recovery. Columns are byte offsets within a line.
fn segment_from_points(
    source: &str,
    start: tree_sitter::Point,
    end: tree_sitter::Point,
) -> Option<String> {
    if end.row < start.row {
        return None;
    }

    let lines: Vec<&str> = source.split_inclusive('\n').collect();
    if start.row == end.row {
        let line = lines.get(start.row)?;
        return line.get(start.column..end.column).map(str::to_string);
    }

    let mut segment = String::new();
    segment.push_str(lines.get(start.row)?.get(start.column..)?);
    for row in start.row + 1..end.row {
        segment.push_str(lines.get(row)?);
    }
    segment.push_str(lines.get(end.row)?.get(..end.column)?);
    Some(segment)
}
