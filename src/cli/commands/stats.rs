use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::cli::CompareArgs;

pub fn handle(new: &Path, old: &Path, json: bool, compare: &CompareArgs) -> Result<()> {
    let pagediff = super::load(compare)?;
    let (new_text, old_text) = super::read_pair(new, old)?;
    let stats = pagediff.diff(&new_text, &old_text).stats;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let granularity = pagediff.config().data.diff.granularity;
    println!("{}", format!("Compared by {}", granularity).bright_blue().bold());
    println!("  {} {:>6} added", "+".bright_green(), stats.added);
    println!("  {} {:>6} removed", "-".bright_red(), stats.removed);
    println!("  {} {:>6} unchanged", "=".bright_black(), stats.unchanged);
    println!(
        "  {} {:>5.1}% similar",
        "~".bright_cyan(),
        stats.similarity() * 100.0
    );

    Ok(())
}
