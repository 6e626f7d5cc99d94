use std::fs;
use std::path::Path;

use crate::error::Result;

pub const REPORT_TITLE: &str = "# AI-Generated Codebase Summary";

/// Append-only list of markdown sections, rendered and written once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    sections: Vec<String>,
}

impl ReportDocument {
    pub fn new() -> Self {
        Self {
            sections: vec![format!("{}\n\n", REPORT_TITLE)],
        }
    }

    pub fn push(&mut self, section: impl Into<String>) {
        self.sections.push(section.into());
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn render(&self) -> String {
        self.sections.concat()
    }

    /// Writes the rendered report, creating parent directories as needed.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.render())?;
        Ok(())
    }
}

impl Default for ReportDocument {
    fn default() -> Self {
        Self::new()
    }
}
