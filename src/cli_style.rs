/*!
 * Table output for the CLI
 */

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use specimen_core_routing::{
    catalog, DEFAULT_PROCESSING_TIME, DEFAULT_STATION, URGENT_TESTS,
};

/// Create a styled data table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Test code to station and processing time, plus the fallback row
pub fn station_table() -> Table {
    let mut table = create_table();
    table.set_header(vec![
        header_cell("Test"),
        header_cell("Station"),
        header_cell("Minutes"),
    ]);

    for test in catalog::known_tests() {
        table.add_row(vec![
            Cell::new(test),
            Cell::new(catalog::station_for_test(test)),
            Cell::new(catalog::processing_time_for(test)),
        ]);
    }

    table.add_row(vec![
        Cell::new("(any other)").fg(Color::DarkGrey),
        Cell::new(DEFAULT_STATION).fg(Color::DarkGrey),
        Cell::new(DEFAULT_PROCESSING_TIME).fg(Color::DarkGrey),
    ]);

    table
}

/// One-line summary of the tests that mark a specimen STAT
pub fn urgent_summary() -> String {
    format!("STAT tests: {}", URGENT_TESTS.join(", "))
}
