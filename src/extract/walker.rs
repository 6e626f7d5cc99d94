use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::warn;

use crate::error::Result;
use crate::languages::LanguageRegistry;

/// Options controlling which files the walker yields.
#[derive(Debug, Clone, Copy)]
pub struct WalkOptions {
    pub include_hidden: bool,
    pub respect_ignore: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            include_hidden: false,
            respect_ignore: true,
        }
    }
}

pub struct FileWalker {
    registry: LanguageRegistry,
    options: WalkOptions,
}

impl FileWalker {
    pub fn new(registry: LanguageRegistry) -> Self {
        Self::with_options(registry, WalkOptions::default())
    }

    pub fn with_options(registry: LanguageRegistry, options: WalkOptions) -> Self {
        Self { registry, options }
    }

    /// Recursively lists supported files under `root`, sorted by name within
    /// each directory so report order is stable across runs.
    pub fn walk(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} is not a directory", root.display()),
            )
            .into());
        }

        let mut files = Vec::new();
        let respect = self.options.respect_ignore;

        let walker = WalkBuilder::new(root)
            .hidden(!self.options.include_hidden)
            .git_ignore(respect)
            .git_global(respect)
            .git_exclude(respect)
            .ignore(respect)
            .parents(respect)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            let path = entry.path();
            if path.is_file() && self.is_supported(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    pub fn is_supported(&self, path: &Path) -> bool {
        self.registry.get_for_file(path).is_some()
    }

    pub fn get_language(&self, path: &Path) -> Option<String> {
        self.registry.get_for_file(path).map(|g| g.name().to_string())
    }
}
