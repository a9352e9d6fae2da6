//! Comparison of two exported notebooks.
//!
//! A notebook export is a directory tree with one file per page. Pages are
//! matched by their path relative to the notebook root.

use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::diff::{DiffEngine, DiffOptions, DiffResult, DiffStats};
use crate::error::InputError;
use crate::read_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Added,
    Removed,
    Modified,
    Unchanged,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageChange {
    pub path: PathBuf,
    pub status: PageStatus,
    pub stats: DiffStats,
    #[serde(skip)]
    pub result: DiffResult,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NotebookReport {
    pub pages: Vec<PageChange>,
}

impl NotebookReport {
    pub fn count(&self, status: PageStatus) -> usize {
        self.pages.iter().filter(|p| p.status == status).count()
    }

    pub fn has_changes(&self) -> bool {
        self.pages.iter().any(|p| p.status != PageStatus::Unchanged)
    }

    pub fn changed(&self) -> impl Iterator<Item = &PageChange> {
        self.pages.iter().filter(|p| p.status != PageStatus::Unchanged)
    }
}

#[derive(Debug, Clone)]
pub struct NotebookOptions {
    pub diff: DiffOptions,
    pub extensions: Vec<String>,
}

impl Default for NotebookOptions {
    fn default() -> Self {
        Self {
            diff: DiffOptions::default(),
            extensions: vec!["txt".to_string(), "md".to_string()],
        }
    }
}

/// Diff every page of `new_dir` against its counterpart in `old_dir`
pub fn compare_notebooks(
    new_dir: &Path,
    old_dir: &Path,
    options: &NotebookOptions,
) -> Result<NotebookReport> {
    let new_pages = collect_pages(new_dir, &options.extensions)?;
    let old_pages = collect_pages(old_dir, &options.extensions)?;

    debug!(
        new_pages = new_pages.len(),
        old_pages = old_pages.len(),
        "comparing notebooks"
    );

    let mut paths: Vec<&PathBuf> = new_pages.keys().chain(old_pages.keys()).collect();
    paths.sort();
    paths.dedup();

    let engine = DiffEngine::new(options.diff);
    let pages = paths
        .into_par_iter()
        .map(|path| -> Result<PageChange> {
            let new_text = new_pages.get(path).map(|p| read_text(p)).transpose()?;
            let old_text = old_pages.get(path).map(|p| read_text(p)).transpose()?;

            let (status, result) = match (new_text, old_text) {
                (Some(new), Some(old)) => {
                    let result = engine.diff(&new, &old);
                    (page_status(&new, &old, &result.stats), result)
                }
                (Some(new), None) => (PageStatus::Added, engine.diff(&new, "")),
                (None, Some(old)) => (PageStatus::Removed, engine.diff("", &old)),
                (None, None) => (PageStatus::Unchanged, DiffResult::default()),
            };

            Ok(PageChange {
                path: path.clone(),
                status,
                stats: result.stats,
                result,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(NotebookReport { pages })
}

fn collect_pages(root: &Path, extensions: &[String]) -> Result<BTreeMap<PathBuf, PathBuf>> {
    if !root.exists() {
        return Err(InputError::NotebookNotFound {
            path: root.to_path_buf(),
        }
        .into());
    }
    if !root.is_dir() {
        return Err(InputError::NotADirectory {
            path: root.to_path_buf(),
        }
        .into());
    }

    let mut pages = BTreeMap::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_file() || !has_page_extension(entry.path(), extensions) {
            continue;
        }

        if let Ok(relative) = entry.path().strip_prefix(root) {
            pages.insert(relative.to_path_buf(), entry.path().to_path_buf());
        }
    }

    Ok(pages)
}

fn has_page_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Blank pages and punctuation-only edits leave a page unchanged
fn page_status(new: &str, old: &str, stats: &DiffStats) -> PageStatus {
    let both_blank = new.trim().is_empty() && old.trim().is_empty();
    if new == old || both_blank || stats.added + stats.removed == 0 {
        PageStatus::Unchanged
    } else {
        PageStatus::Modified
    }
}
