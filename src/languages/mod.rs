pub mod python;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

pub trait LanguageGrammar: Send + Sync {
    fn name(&self) -> &'static str;
    fn file_extensions(&self) -> &[&'static str];
    fn language(&self) -> tree_sitter::Language;

    /// Node kinds that define a function.
    fn function_kinds(&self) -> &[&'static str];

    /// Node kinds that define a class.
    fn class_kinds(&self) -> &[&'static str];

    /// Wrapper node carrying decorators/annotations in front of a definition.
    /// Its span is the verbatim span of the wrapped definition.
    fn decorated_kind(&self) -> Option<&'static str> {
        None
    }

    /// Field on the decorated wrapper that holds the actual definition.
    fn decorated_field(&self) -> &'static str {
        "definition"
    }

    /// Tag used for fenced code blocks in prompts and reports.
    fn fence_tag(&self) -> &'static str {
        self.name()
    }

    /// Node kinds the grammar parses but the language no longer accepts.
    fn rejected_kinds(&self) -> &[&'static str] {
        &[]
    }

    /// Whether `node` is syntax the language rejects even though the tree has
    /// no ERROR or MISSING node for it.
    fn is_rejected(&self, node: &tree_sitter::Node<'_>) -> bool {
        self.rejected_kinds().contains(&node.kind())
    }
}

#[derive(Clone)]
pub struct LanguageRegistry {
    languages: HashMap<String, Arc<dyn LanguageGrammar>>,
    extension_map: HashMap<String, String>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            languages: HashMap::new(),
            extension_map: HashMap::new(),
        };

        registry.register(Arc::new(python::PythonGrammar));

        registry
    }

    pub fn register(&mut self, grammar: Arc<dyn LanguageGrammar>) {
        let name = grammar.name().to_string();
        for ext in grammar.file_extensions() {
            self.extension_map.insert(ext.to_string(), name.clone());
        }
        self.languages.insert(name, grammar);
    }

    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn LanguageGrammar>> {
        self.languages.get(name).cloned()
    }

    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn LanguageGrammar>> {
        self.extension_map
            .get(ext)
            .and_then(|name| self.languages.get(name))
            .cloned()
    }

    pub fn get_for_file(&self, path: &Path) -> Option<Arc<dyn LanguageGrammar>> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.get_by_extension(ext))
    }

    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.extension_map.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_new() {
        let registry = LanguageRegistry::new();
        assert!(registry.get_by_name("python").is_some());
    }

    #[test]
    fn test_get_by_name_unknown() {
        let registry = LanguageRegistry::new();
        assert!(registry.get_by_name("cobol").is_none());
        assert!(registry.get_by_name("").is_none());
    }

    #[test]
    fn test_get_by_extension_py() {
        let registry = LanguageRegistry::new();
        assert_eq!(registry.get_by_extension("py").unwrap().name(), "python");
        assert_eq!(registry.get_by_extension("pyi").unwrap().name(), "python");
        assert!(registry.get_by_extension("rs").is_none());
    }

    #[test]
    fn test_get_for_file() {
        let registry = LanguageRegistry::new();
        assert!(registry.get_for_file(Path::new("pkg/module.py")).is_some());
        assert!(registry.get_for_file(Path::new("README.md")).is_none());
        assert!(registry.get_for_file(Path::new("Makefile")).is_none());
    }

    #[test]
    fn test_supported_extensions_sorted() {
        let registry = LanguageRegistry::default();
        assert_eq!(registry.supported_extensions(), vec!["py", "pyi"]);
    }
}
