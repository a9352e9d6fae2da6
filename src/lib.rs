pub mod config;
pub mod diff;
pub mod error;
pub mod notebook;
pub mod render;

pub use diff::{compute_diff, DiffEngine, DiffOptions, DiffResult, SegmentKind, TextSegment};
pub use error::{PageDiffError, PageDiffResult};

use anyhow::Result;
use std::path::Path;

use error::ErrorContext;
use notebook::{NotebookOptions, NotebookReport};
use render::OutputFormat;

/// Project-level entry point: configuration plus the engine it selects
#[derive(Debug, Clone)]
pub struct PageDiff {
    config: config::Config,
}

impl PageDiff {
    pub fn new(project_root: impl AsRef<Path>) -> Result<Self> {
        let config = config::Config::load_or_default(project_root)?;
        Ok(Self { config })
    }

    pub fn init(project_root: impl AsRef<Path>) -> Result<Self> {
        let project_root = project_root.as_ref();
        config::Config::init(project_root)?;

        Self::new(project_root)
    }

    pub fn config(&self) -> &config::Config {
        &self.config
    }

    /// In-memory overrides, e.g. from command-line flags; nothing is saved
    pub fn config_mut(&mut self) -> &mut config::Config {
        &mut self.config
    }

    pub fn engine(&self) -> DiffEngine {
        DiffEngine::new(self.config.data.diff_options())
    }

    pub fn diff(&self, new_text: &str, old_text: &str) -> DiffResult {
        self.engine().diff(new_text, old_text)
    }

    pub fn render(&self, result: &DiffResult, format: Option<OutputFormat>) -> PageDiffResult<String> {
        let format = format.unwrap_or(self.config.data.render.format);
        render::render(format, &result.segments, &self.config.data.render_options())
    }

    pub fn compare_notebooks(&self, new_dir: &Path, old_dir: &Path) -> Result<NotebookReport> {
        let options = NotebookOptions {
            diff: self.config.data.diff_options(),
            extensions: self.config.data.notebook.extensions.clone(),
        };
        notebook::compare_notebooks(new_dir, old_dir, &options)
    }
}

/// Read a page from disk, replacing invalid UTF-8 with U+FFFD
pub fn read_text(path: &Path) -> PageDiffResult<String> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
