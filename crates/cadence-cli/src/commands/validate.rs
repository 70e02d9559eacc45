use anyhow::Result;
use owo_colors::OwoColorize;

use cadence_core::calendar::format_date;
use cadence_core::validation::validate_end_date_str;

use crate::cli::ValidateCommand;
use crate::config::Config;

pub fn validate_command(command: ValidateCommand, config: &Config) -> Result<()> {
    let max = command
        .max
        .unwrap_or_else(|| format_date(config.max_end_date));

    validate_end_date_str(&command.start, &command.until, &max)?;

    if command.until.trim().is_empty() {
        println!("{} no end date (unlimited)", "OK".green().bold());
    } else {
        println!("{} {}", "OK".green().bold(), command.until.trim());
    }
    Ok(())
}
