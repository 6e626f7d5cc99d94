use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Function,
    Class,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Function => "function",
            ElementKind::Class => "class",
        }
    }

    /// Heading label used in the report (`### Function: ...`).
    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Function => "Function",
            ElementKind::Class => "Class",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A top-level definition lifted verbatim out of a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeElement {
    pub kind: ElementKind,
    pub name: String,
    /// Exact source of the definition, decorators included.
    pub source_text: String,
    pub start_line: u32,
    pub end_line: u32,
}

impl CodeElement {
    pub fn new(kind: ElementKind, name: impl Into<String>, source_text: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            source_text: source_text.into(),
            start_line: 0,
            end_line: 0,
        }
    }

    pub fn with_lines(mut self, start_line: u32, end_line: u32) -> Self {
        self.start_line = start_line;
        self.end_line = end_line;
        self
    }
}
