use anyhow::Result;
use colored::Colorize;
use pagediff::config::Config;

use crate::cli::ConfigAction;

pub fn handle(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Set { key, value } => {
            println!(
                "{} Setting {} = {}",
                "→".bright_green(),
                key.bright_cyan(),
                value.bright_yellow()
            );

            let mut config = Config::load(".")?;
            config.set(&key, &value)?;

            println!("{} Configuration updated", "✓".bright_green());
        }

        ConfigAction::Get { key } => {
            let config = Config::load_or_default(".")?;
            println!("{} = {}", key.bright_cyan(), config.get(&key)?.bright_yellow());
        }

        ConfigAction::List => {
            let config = Config::load_or_default(".")?;
            let source = if config.path.exists() {
                config.path.display().to_string()
            } else {
                "built-in defaults".to_string()
            };

            println!("{} ({})", "Current Configuration:".bright_blue().bold(), source);
            for (key, value) in config.entries()? {
                println!("  {} = {}", key.bright_cyan(), value.bright_yellow());
            }
        }
    }

    Ok(())
}
