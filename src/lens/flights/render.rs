//! Flight record rendering
//!
//! Pure formatting over already loaded records; nothing here touches storage.

use tabled::grid::util::string::get_text_width;
use tabled::settings::object::{Columns, Rows};
use tabled::settings::{Alignment, Style, Width};
use tabled::{Table, Tabled};

use super::types::{FlightRecord, FlightTableRow};
use crate::lens::utils::OutputFormat;

/// Printed instead of a table when there is nothing to show
pub const EMPTY_MESSAGE: &str = "No flights recorded.";

/// Minimum widths of the `No`, `Destination`, `Flight Number` and `Type` columns
///
/// Widths count the one-space padding on each side of a cell.
pub const COLUMN_WIDTHS: [usize; 4] = [4, 30, 20, 8];

/// Cell padding added on both sides of every cell by default
const CELL_PADDING: usize = 2;

/// Render records as an ASCII bordered table
///
/// Numeric columns are right-aligned, text columns left-aligned, and the
/// header row centered.
pub fn render_table(records: &[FlightRecord]) -> String {
    if records.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let rows = FlightTableRow::numbered(records);
    let widths = column_widths(&rows);

    let mut table = Table::new(rows);
    table
        .with(Style::ascii())
        .modify(Columns::new(1..3), Alignment::left())
        .modify(Columns::new(0..1), Alignment::right())
        .modify(Columns::new(3..4), Alignment::right())
        .modify(Rows::first(), Alignment::center());

    // Set last: widths are applied to the grid, not padded into the cell text
    table.with(Width::list(widths));

    table.to_string()
}

/// Widest cell of each column, raised to its minimum width
fn column_widths(rows: &[FlightTableRow]) -> Vec<usize> {
    let mut widths = COLUMN_WIDTHS.to_vec();
    let mut fit = |column: usize, text: &str| {
        widths[column] = widths[column].max(get_text_width(text) + CELL_PADDING);
    };

    for (column, header) in FlightTableRow::headers().iter().enumerate() {
        fit(column, header);
    }
    for row in rows {
        for (column, field) in row.fields().iter().enumerate() {
            fit(column, field);
        }
    }

    widths
}

/// Format records for output in the requested format
pub fn format_flights(records: &[FlightRecord], format: &OutputFormat) -> String {
    if format.is_json() {
        return serde_json::to_string_pretty(records).unwrap_or_default();
    }
    if records.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    match format {
        OutputFormat::Markdown => Table::new(FlightTableRow::numbered(records))
            .with(Style::markdown())
            .to_string(),
        OutputFormat::Psv => {
            let mut output = String::from("destination|flight_number|aircraft_type\n");
            for r in records {
                output.push_str(&format!(
                    "{}|{}|{}\n",
                    r.destination,
                    r.flight_number.as_deref().unwrap_or(""),
                    r.aircraft_type
                ));
            }
            output
        }
        _ => render_table(records),
    }
}
