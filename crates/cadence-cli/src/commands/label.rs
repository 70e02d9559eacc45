use anyhow::Result;

use cadence_core::display::repeat_label;

use crate::cli::LabelCommand;
use crate::parser::parse_cli_date;

pub fn label_command(command: LabelCommand) -> Result<()> {
    let until = command.until.as_deref().map(parse_cli_date).transpose()?;
    println!("{}", repeat_label(command.every, command.interval, until));
    Ok(())
}
