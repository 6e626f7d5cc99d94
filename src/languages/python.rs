use super::LanguageGrammar;

pub struct PythonGrammar;

impl LanguageGrammar for PythonGrammar {
    fn name(&self) -> &'static str {
        "python"
    }

    fn file_extensions(&self) -> &[&'static str] {
        &["py", "pyi"]
    }

    fn language(&self) -> tree_sitter::Language {
        tree_sitter_python::LANGUAGE.into()
    }

    // `async def` is a function_definition with a leading `async` token
    fn function_kinds(&self) -> &[&'static str] {
        &["function_definition"]
    }

    fn class_kinds(&self) -> &[&'static str] {
        &["class_definition"]
    }

    fn decorated_kind(&self) -> Option<&'static str> {
        Some("decorated_definition")
    }

    // Python 2 forms the grammar still parses
    fn rejected_kinds(&self) -> &[&'static str] {
        &["print_statement", "exec_statement", "chevron", "<>"]
    }

    fn is_rejected(&self, node: &tree_sitter::Node<'_>) -> bool {
        if self.rejected_kinds().contains(&node.kind()) {
            return true;
        }
        // `raise E, "msg"`
        node.kind() == "raise_statement"
            && node
                .named_child(0)
                .is_some_and(|value| value.kind() == "expression_list")
    }
}
