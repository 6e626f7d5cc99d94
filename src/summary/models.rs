use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::extract::ElementKind;

/// A single function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Parameter {
    /// The name of the parameter.
    pub name: String,
    /// The expected type of the parameter.
    pub param_type: String,
    /// A concise explanation of the parameter.
    pub description: String,
}

/// Summary of a function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FunctionSummary {
    /// A one-sentence explanation of what the function does.
    pub description: String,
    /// A list of the function's parameters.
    pub parameters: Vec<Parameter>,
    /// A description of the value returned by the function and its type.
    pub returns: String,
    /// A simple, clear code block showing how to call this function.
    pub usage_example: String,
}

/// Summary of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClassSummary {
    /// A paragraph explaining the purpose and capabilities of the class.
    pub overall_description: String,
    /// An explanation of the constructor and its parameters.
    pub initialization: String,
    /// Short notes on the most important public methods and what they do.
    pub key_methods: Vec<String>,
    /// A simple, clear code block showing how to instantiate and use the class.
    pub usage_example: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementSummary {
    Function(FunctionSummary),
    Class(ClassSummary),
}

impl ElementSummary {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementSummary::Function(_) => ElementKind::Function,
            ElementSummary::Class(_) => ElementKind::Class,
        }
    }
}

/// JSON Schema the model must answer with for `kind`.
///
/// Generated from the same types the response is decoded into.
pub fn schema_for_kind(kind: ElementKind) -> serde_json::Value {
    match kind {
        ElementKind::Function => schemars::schema_for!(FunctionSummary),
        ElementKind::Class => schemars::schema_for!(ClassSummary),
    }
    .to_value()
}
