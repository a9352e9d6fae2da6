pub mod config;
pub mod diff;
pub mod init;
pub mod notebook;
pub mod stats;

use anyhow::{Context, Result};
use pagediff::error::InputError;
use pagediff::PageDiff;
use std::io::Read;
use std::path::Path;

use crate::cli::CompareArgs;

/// Load the project configuration and apply command-line overrides
fn load(compare: &CompareArgs) -> Result<PageDiff> {
    let mut pagediff = PageDiff::new(".").context("Failed to load pagediff configuration")?;

    let data = &mut pagediff.config_mut().data;
    if let Some(granularity) = compare.granularity {
        data.diff.granularity = granularity;
    }
    if let Some(alignment) = compare.alignment {
        data.diff.alignment = alignment;
    }

    Ok(pagediff)
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read the new and old sides, allowing at most one of them from stdin
fn read_pair(new: &Path, old: &Path) -> Result<(String, String)> {
    if is_stdin(new) && is_stdin(old) {
        return Err(InputError::StdinTwice.into());
    }

    Ok((read_input(new)?, read_input(old)?))
}

fn read_input(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read from stdin")?;
        return Ok(String::from_utf8_lossy(&bytes).into_owned());
    }

    Ok(pagediff::read_text(path)?)
}
