use chrono::{Datelike, Weekday};
use comfy_table::{Attribute, Cell, Color, Row, Table};
use owo_colors::OwoColorize;

use cadence_core::calendar::format_date;
use cadence_core::models::Event;

pub fn display_occurrences(anchor: &Event, occurrences: &[Event]) {
    if occurrences.is_empty() {
        println!("No occurrences: the end date is before the first date.");
        return;
    }

    let label = anchor.repeat.to_string();
    if label.is_empty() {
        println!("{}", "Single event".blue().bold());
    } else {
        println!("{}", label.blue().bold());
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Date", "Day", "Time", "Title", "Location"]);

    for (i, event) in occurrences.iter().enumerate() {
        let mut row = Row::new();
        row.add_cell(Cell::new(i + 1));

        let mut date_cell = Cell::new(format_date(event.date));
        if i == 0 {
            date_cell = date_cell.add_attribute(Attribute::Bold);
        }
        row.add_cell(date_cell);

        let weekday = event.date.weekday();
        let day_cell = match weekday {
            Weekday::Sat | Weekday::Sun => Cell::new(weekday).fg(Color::Yellow),
            _ => Cell::new(weekday),
        };
        row.add_cell(day_cell);

        row.add_cell(Cell::new(time_range(event)));
        row.add_cell(Cell::new(&event.title));
        row.add_cell(Cell::new(if event.location.is_empty() {
            "None"
        } else {
            event.location.as_str()
        }));
        table.add_row(row);
    }

    println!("{table}");
}

fn time_range(event: &Event) -> String {
    match (event.start_time.is_empty(), event.end_time.is_empty()) {
        (true, true) => "All day".to_string(),
        (false, true) => event.start_time.clone(),
        (true, false) => format!("until {}", event.end_time),
        (false, false) => format!("{}-{}", event.start_time, event.end_time),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_range() {
        let mut event = Event::default();
        assert_eq!(time_range(&event), "All day");
        event.start_time = "10:00".to_string();
        assert_eq!(time_range(&event), "10:00");
        event.end_time = "11:00".to_string();
        assert_eq!(time_range(&event), "10:00-11:00");
    }
}
