use std::collections::HashSet;

use crate::columns::FieldColumns;
use crate::error::Error;
use crate::model::{Cell, Field, Row, Table};

/// Rows that become stickers, in input order.
///
/// Blank rows are dropped, text cells trimmed (with `""` and `nan` read as
/// empty), rows without a style or stock code dropped, and repeated
/// (style, stock code) pairs collapsed onto their first occurrence.
pub fn select_rows(table: &Table, columns: &FieldColumns) -> Result<Vec<Row>, Error> {
    let style = required(columns, Field::Style)?;
    let stock = required(columns, Field::StockCode)?;

    let mut kept: Vec<Row> = Vec::new();
    let mut seen: HashSet<(PairKey, PairKey)> = HashSet::new();
    let mut blank = 0usize;
    let mut incomplete = 0usize;
    let mut duplicates = 0usize;

    for row in &table.rows {
        if row.cells.iter().all(Cell::is_absent) {
            blank += 1;
            continue;
        }

        let row = Row::new(row.cells.iter().map(Cell::normalized).collect());
        let (Some(style_key), Some(stock_key)) =
            (PairKey::of(row.cell(style)), PairKey::of(row.cell(stock)))
        else {
            incomplete += 1;
            continue;
        };

        if !seen.insert((style_key, stock_key)) {
            duplicates += 1;
            continue;
        }
        kept.push(row);
    }

    log::debug!(
        "Row filter: {} in, {} kept, {} blank, {} missing style/stock code, {} duplicates",
        table.rows.len(),
        kept.len(),
        blank,
        incomplete,
        duplicates,
    );

    Ok(kept)
}

fn required(columns: &FieldColumns, field: Field) -> Result<usize, Error> {
    columns
        .column(field)
        .map(|c| c.position)
        .ok_or_else(|| Error::MissingColumn {
            field,
            header: columns.wanted(field).to_string(),
        })
}

/// Hashable identity of a present cell. Text and numbers never compare equal.
#[derive(PartialEq, Eq, Hash)]
enum PairKey {
    Text(String),
    Number(u64),
}

impl PairKey {
    fn of(cell: &Cell) -> Option<PairKey> {
        match cell {
            Cell::Text(s) if !s.is_empty() => Some(PairKey::Text(s.clone())),
            // +0.0 and -0.0 are the same stock code
            Cell::Number(n) if !n.is_nan() => Some(PairKey::Number((n + 0.0).to_bits())),
            _ => None,
        }
    }
}
