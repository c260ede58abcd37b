use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use labsyn_model::{Record, SynonymFlag, fields};
use labsyn_report::{Result, export_json};

use crate::cli::ViewArg;
use crate::types::ScanResult;

pub fn print_summary(result: &ScanResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (not written)"),
    }
    if result.removed > 0 {
        println!("Synonyms removed: {}", result.removed);
    }
    println!("{}", counts_table(result));

    if let Some(table) = rows_table(result) {
        println!();
        println!("{}:", view_title(result.view));
        println!("{table}");
    }
}

/// All scanned rows as a JSON array, for piping into other tools.
pub fn render_json(result: &ScanResult) -> Result<String> {
    export_json(result.table.records())
}

/// Row counts per tab, as in the "Total Rows" / "Selected Rows" header.
pub fn counts_table(result: &ScanResult) -> Table {
    let suggested = result.table.count_with_flag(SynonymFlag::True);
    let unmapped = result.table.count_with_flag(SynonymFlag::False);

    let mut table = Table::new();
    table.set_header(vec![header_cell("Tab"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Suggested Synonyms").fg(Color::Blue),
        count_cell(suggested, Color::Yellow),
    ]);
    table.add_row(vec![Cell::new("Unmapped"), dim_cell(unmapped)]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.table.len()).add_attribute(Attribute::Bold),
    ]);
    table
}

/// The rows of the selected view, or `None` when there is nothing to show.
pub fn rows_table(result: &ScanResult) -> Option<Table> {
    let rows: Vec<&Record> = match result.view {
        ViewArg::None => return None,
        ViewArg::All => result.table.records().iter().collect(),
        ViewArg::Suggested => result.table.rows_with_flag(SynonymFlag::True).collect(),
        ViewArg::Unmapped => result.table.rows_with_flag(SynonymFlag::False).collect(),
    };
    if rows.is_empty() {
        return None;
    }

    let columns = result.table.columns();
    let mut table = Table::new();
    table.set_header(
        columns
            .iter()
            .map(|column| header_cell(&column_title(column)))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for record in rows {
        table.add_row(
            columns
                .iter()
                .map(|column| value_cell(column, record))
                .collect::<Vec<_>>(),
        );
    }
    Some(table)
}

fn view_title(view: ViewArg) -> &'static str {
    match view {
        ViewArg::Suggested => "Suggested Synonyms",
        ViewArg::Unmapped => "Unmapped",
        ViewArg::All | ViewArg::None => "All rows",
    }
}

/// Capitalizes the first letter of a column name for display.
fn column_title(column: &str) -> String {
    let mut chars = column.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn value_cell(column: &str, record: &Record) -> Cell {
    let text = record
        .get(column)
        .map(ToString::to_string)
        .unwrap_or_default();
    match column {
        fields::SYNONYMS if !text.is_empty() => Cell::new(text).fg(Color::Yellow),
        fields::POSSIBLE_SYNONYMS if text == SynonymFlag::True.as_str() => {
            Cell::new(text).fg(Color::Green).add_attribute(Attribute::Bold)
        }
        _ if text.is_empty() => dim_cell("-"),
        _ => Cell::new(text),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
