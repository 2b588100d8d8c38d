use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::CountdownResult;

/// Token replaced by the frame's display text.
pub const PLACEHOLDER: &str = "{text}";

/// 580x150 black canvas with the label centered in white.
pub const DEFAULT_TEMPLATE: &str = r##"<svg width="580" height="150" xmlns="http://www.w3.org/2000/svg">
        <rect width="100%" height="100%" fill="#000" />
        <text x="290" y="140" font-family="Arial Black" font-size="180" fill="#fff" text-anchor="middle">{text}</text>
        </svg>"##;

/// SVG markup with a [`PLACEHOLDER`] slot for the frame label.
///
/// The content is not validated; a template without the placeholder renders verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Default for Template {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

impl Template {
    /// Wrap template markup.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Load a template from disk.
    pub fn from_path(path: &Path) -> CountdownResult<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("read svg template '{}'", path.display()))?;
        Ok(Self::new(source))
    }

    /// Load a template given on the command line; relative paths are taken from `work_dir`.
    pub fn resolve(path: &Path, work_dir: &Path) -> CountdownResult<Self> {
        Self::from_path(&work_dir.join(path))
    }

    /// Raw template markup.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the template contains the substitution slot.
    pub fn has_placeholder(&self) -> bool {
        self.source.contains(PLACEHOLDER)
    }

    /// Substitute `text` for the placeholder in one pass; inserted text is never rescanned.
    pub fn render(&self, text: &str) -> String {
        self.source.replace(PLACEHOLDER, text)
    }

    /// Render `text` and write the document to `path`, replacing any existing file.
    pub fn write_document(&self, path: &Path, text: &str) -> CountdownResult<()> {
        std::fs::write(path, self.render(text))
            .with_context(|| format!("write svg '{}'", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/template.rs"]
mod tests;
