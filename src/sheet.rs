use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};

use crate::error::Error;
use crate::model::{Cell, Row, Table};

/// Load the first worksheet; its first row is the header row.
pub fn read_table(path: &Path) -> Result<Table, Error> {
    if !path.is_file() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| Error::Spreadsheet(format!("{}: {e}", path.display())))?;
    let sheet_name = workbook.sheet_names().first().cloned().unwrap_or_default();
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::Spreadsheet(format!("{}: workbook has no worksheets", path.display())))??;

    let table = table_from_range(&range);
    log::debug!(
        "Read sheet \"{sheet_name}\": {} columns, {} data rows",
        table.headers.len(),
        table.rows.len(),
    );
    Ok(table)
}

/// Split a worksheet range into headers and data rows.
pub fn table_from_range(range: &Range<Data>) -> Table {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Table::default();
    };

    let headers = header_row
        .iter()
        .enumerate()
        .map(|(i, cell)| match cell {
            Data::Empty => format!("Unnamed: {i}"),
            Data::String(s) if s.trim().is_empty() => format!("Unnamed: {i}"),
            Data::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();

    let rows = rows
        .map(|r| Row::new(r.iter().map(cell_from_data).collect()))
        .collect();

    Table { headers, rows }
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::String(s) => Cell::Text(s.clone()),
        Data::Bool(b) => Cell::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        other => Cell::Text(other.to_string()),
    }
}
