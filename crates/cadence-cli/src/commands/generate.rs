use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;
use tracing::info;

use cadence_core::error::CoreError;
use cadence_core::models::{Event, RepeatRule, RepeatType};
use cadence_core::recurrence::RepeatSequenceGenerator;
use cadence_core::validation::validate_end_date;

use crate::cli::GenerateCommand;
use crate::config::Config;
use crate::parser::parse_cli_date;
use crate::views::table::display_occurrences;

pub fn generate_events(command: GenerateCommand, config: &Config) -> Result<()> {
    let anchor = match &command.input {
        Some(path) => load_anchor(path)?,
        None => anchor_from_flags(&command)?,
    };

    if !command.no_validate && anchor.repeat.kind.is_repeating() {
        validate_end_date(anchor.date, anchor.repeat.end_date, config.max_end_date)?;
    }

    let generator = RepeatSequenceGenerator::new(command.max_count.unwrap_or(config.max_count));
    let generation = generator.generate(&anchor);
    info!(
        count = generation.len(),
        max_count = generator.max_count(),
        "generated occurrences"
    );

    if command.json {
        println!("{}", serde_json::to_string_pretty(&generation.occurrences)?);
    } else {
        display_occurrences(&anchor, &generation.occurrences);
    }

    if anchor.repeat.kind.is_repeating() && generation.reached_cap() {
        eprintln!(
            "{} Too many occurrences; only the first {} were generated.",
            "Warning:".yellow().bold(),
            generation.max_count
        );
    }

    Ok(())
}

fn load_anchor(path: &Path) -> Result<Event> {
    let json = std::fs::read_to_string(path)
        .map_err(CoreError::from)
        .with_context(|| format!("Failed to read anchor event from '{}'", path.display()))?;
    let event = Event::from_json(&json)
        .with_context(|| format!("Failed to parse anchor event in '{}'", path.display()))?;
    Ok(event)
}

fn anchor_from_flags(command: &GenerateCommand) -> Result<Event> {
    let date = command
        .date
        .as_deref()
        .ok_or_else(|| CoreError::InvalidInput("an anchor date is required".to_string()))?;
    let end_date = command.until.as_deref().map(parse_cli_date).transpose()?;

    Ok(Event {
        title: command.title.clone(),
        date: parse_cli_date(date)?,
        start_time: command.start_time.clone(),
        end_time: command.end_time.clone(),
        description: command.description.clone(),
        location: command.location.clone(),
        category: command.category.clone(),
        repeat: RepeatRule::new(
            command.every.unwrap_or(RepeatType::None),
            command.interval,
            end_date,
        ),
        ..Default::default()
    })
}
