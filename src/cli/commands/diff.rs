use anyhow::Result;
use pagediff::render::OutputFormat;
use std::path::Path;
use tracing::debug;

use crate::cli::CompareArgs;

pub fn handle(
    new: &Path,
    old: &Path,
    format: Option<OutputFormat>,
    no_color: bool,
    compare: &CompareArgs,
) -> Result<()> {
    let mut pagediff = super::load(compare)?;
    if no_color {
        pagediff.config_mut().data.render.color = false;
    }

    let (new_text, old_text) = super::read_pair(new, old)?;
    let result = pagediff.diff(&new_text, &old_text);
    debug!(
        added = result.stats.added,
        removed = result.stats.removed,
        unchanged = result.stats.unchanged,
        "computed diff"
    );

    let rendered = pagediff.render(&result, format)?;
    println!("{}", rendered);

    Ok(())
}
