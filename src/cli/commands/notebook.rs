use anyhow::Result;
use colored::Colorize;
use pagediff::notebook::PageStatus;
use std::path::Path;

use crate::cli::CompareArgs;

pub fn handle(new: &Path, old: &Path, verbose: bool, compare: &CompareArgs) -> Result<()> {
    let pagediff = super::load(compare)?;
    let report = pagediff.compare_notebooks(new, old)?;

    println!("{}", "Notebook comparison".bright_blue().bold());
    println!("{}", "===================".bright_blue());

    if report.pages.is_empty() {
        println!("{} No pages found", "⚠".bright_yellow());
        return Ok(());
    }

    for page in &report.pages {
        let marker = match page.status {
            PageStatus::Added => "A".bright_green(),
            PageStatus::Removed => "D".bright_red(),
            PageStatus::Modified => "M".bright_yellow(),
            PageStatus::Unchanged => " ".normal(),
        };
        println!(
            "  {} {} {}",
            marker,
            page.path.display(),
            format!("(+{} -{})", page.stats.added, page.stats.removed).bright_black()
        );
    }

    println!(
        "\n{} added, {} removed, {} modified, {} unchanged",
        report.count(PageStatus::Added),
        report.count(PageStatus::Removed),
        report.count(PageStatus::Modified),
        report.count(PageStatus::Unchanged)
    );

    if verbose {
        for page in report.changed().filter(|p| p.status == PageStatus::Modified) {
            println!("\n{}", page.path.display().to_string().bright_cyan().bold());
            println!("{}", pagediff.render(&page.result, None)?);
        }
    }

    if !report.has_changes() {
        println!("{} Notebooks are identical", "✓".bright_green());
    }

    Ok(())
}
