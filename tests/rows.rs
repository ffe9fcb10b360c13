mod common;

use common::{HEADERS, inventory_row, num, table, text};
use sticker_sheet::{
    Cell, ColumnIndex, Error, Field, FieldAliases, FieldColumns, Row, Table, select_rows,
};

fn columns_for(table: &Table) -> FieldColumns {
    FieldColumns::resolve(&ColumnIndex::build(&table.headers), &FieldAliases::default())
}

fn styles(rows: &[Row]) -> Vec<Cell> {
    rows.iter().map(|r| r.cell(0).clone()).collect()
}

#[test]
fn rows_without_style_or_stock_code_are_dropped() {
    let t = table(
        &HEADERS,
        vec![
            inventory_row(text("R-100"), text("S1")),
            inventory_row(Cell::Empty, text("S2")),
            inventory_row(text("R-102"), Cell::Empty),
            inventory_row(text("   "), text("S4")),
            inventory_row(text("R-104"), text("nan")),
            inventory_row(text("R-105"), num(f64::NAN)),
            inventory_row(text("R-106"), text("S6")),
        ],
    );
    let rows = select_rows(&t, &columns_for(&t)).expect("filter");
    assert_eq!(styles(&rows), vec![text("R-100"), text("R-106")]);
}

#[test]
fn first_of_each_style_and_stock_pair_wins() {
    let mut dup = inventory_row(text("R-1"), text("S1"));
    dup.cells[7] = num(99.0);
    let t = table(
        &HEADERS,
        vec![
            inventory_row(text("R-1"), text("S1")),
            inventory_row(text("R-2"), text("S1")),
            dup,
            inventory_row(text("R-1"), text("S2")),
            inventory_row(text(" R-2 "), text("S1 ")),
        ],
    );
    let rows = select_rows(&t, &columns_for(&t)).expect("filter");
    assert_eq!(styles(&rows), vec![text("R-1"), text("R-2"), text("R-1")]);
    assert_eq!(rows[0].cell(7), &num(4.9));
    assert_eq!(rows[2].cell(8), &text("S2"));
}

#[test]
fn numbers_and_text_are_different_stock_codes() {
    let t = table(
        &HEADERS,
        vec![
            inventory_row(text("R-1"), num(1001.0)),
            inventory_row(text("R-1"), text("1001")),
            inventory_row(text("R-1"), num(1001.0)),
        ],
    );
    let rows = select_rows(&t, &columns_for(&t)).expect("filter");
    assert_eq!(rows.len(), 2);
}

#[test]
fn text_cells_are_trimmed_and_blank_markers_cleared() {
    let mut row = inventory_row(text("  R-7  "), text("\tS7 "));
    row.cells[1] = text("  ");
    row.cells[5] = text("NaN");
    let t = table(&HEADERS, vec![Row::default(), row]);
    let rows = select_rows(&t, &columns_for(&t)).expect("filter");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].cell(0), &text("R-7"));
    assert_eq!(rows[0].cell(8), &text("S7"));
    assert_eq!(rows[0].cell(1), &Cell::Empty);
    assert_eq!(rows[0].cell(5), &Cell::Empty);
}

#[test]
fn fully_blank_rows_are_skipped() {
    let t = table(
        &HEADERS,
        vec![
            Row::new(vec![Cell::Empty; 9]),
            Row::new(vec![text(""), num(f64::NAN)]),
            inventory_row(text("R-1"), text("S1")),
        ],
    );
    let rows = select_rows(&t, &columns_for(&t)).expect("filter");
    assert_eq!(rows.len(), 1);
}

#[test]
fn short_rows_read_missing_cells_as_empty() {
    let t = table(&HEADERS, vec![Row::new(vec![text("R-1"), num(18.0)])]);
    let rows = select_rows(&t, &columns_for(&t)).expect("filter");
    assert!(rows.is_empty());
}

#[test]
fn missing_stock_column_is_an_error() {
    let t = table(
        &["Style No", "Type", "Gross Wt"],
        vec![Row::new(vec![text("R-1"), num(18.0), num(3.2)])],
    );
    match select_rows(&t, &columns_for(&t)) {
        Err(Error::MissingColumn { field, header }) => {
            assert_eq!(field, Field::StockCode);
            assert_eq!(header, "stock code");
        }
        other => panic!("expected missing column, got {other:?}"),
    }
}

#[test]
fn missing_style_column_is_reported_first() {
    let t = table(&["Type"], vec![]);
    let err = select_rows(&t, &columns_for(&t)).unwrap_err();
    assert!(matches!(err, Error::MissingColumn { field: Field::Style, .. }));
    assert!(err.to_string().contains("style no"), "{err}");
}

#[test]
fn headers_only_table_filters_to_nothing() {
    let t = table(&HEADERS, vec![]);
    let rows = select_rows(&t, &columns_for(&t)).expect("filter");
    assert!(rows.is_empty());
}
