use anyhow::{Context, Result};
use colored::Colorize;
use pagediff::config::Config;
use pagediff::PageDiff;
use std::path::Path;

pub fn handle(path: &Path) -> Result<()> {
    println!("{}", "Initializing pagediff in your project...".bright_blue().bold());
    println!();

    let pagediff = PageDiff::init(path)
        .context("Failed to initialize pagediff in the specified directory")?;
    println!(
        "  {} Wrote {}",
        "✓".bright_green(),
        Config::project_path(path).display()
    );

    let data = &pagediff.config().data;
    println!("\n{}", "Defaults:".bright_blue().bold());
    println!("  • Units: {}", data.diff.granularity.to_string().bright_cyan());
    println!("  • Alignment: {}", data.diff.alignment.to_string().bright_cyan());
    println!("  • Output: {}", data.render.format.to_string().bright_cyan());

    println!("\n{}", "Quick start:".bright_blue().bold());
    println!("  {}", "pagediff diff post.txt page.txt".bright_yellow());
    println!("  {}", "pagediff notebook export-new/ export-old/".bright_yellow());

    Ok(())
}
