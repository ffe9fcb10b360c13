#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use sticker_sheet::{Cell, Row, Table};

pub const HEADERS: [&str; 9] = [
    "Style No",
    "Type",
    "Dia Pcs",
    "Dia Wt",
    "Gem Stone Pcs",
    "Gem Stone Wt",
    "Gross Wt",
    "Net Wt",
    "Stock Code",
];

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn text(s: &str) -> Cell {
    Cell::Text(s.to_string())
}

pub fn num(n: f64) -> Cell {
    Cell::Number(n)
}

/// A full inventory row in `HEADERS` order.
pub fn inventory_row(style: Cell, stock: Cell) -> Row {
    Row::new(vec![
        style,
        num(18.0),
        num(12.0),
        num(0.245),
        num(3.0),
        num(1.5),
        num(5.678),
        num(4.9),
        stock,
    ])
}

pub fn table(headers: &[&str], rows: Vec<Row>) -> Table {
    Table {
        headers: headers.iter().map(|h| h.to_string()).collect(),
        rows,
    }
}

/// Output directory: tests/output/<case>/
pub fn output_dir(case: &str) -> PathBuf {
    let dir = PathBuf::from("tests/output").join(case);
    if dir.exists() {
        std::fs::remove_dir_all(&dir).ok();
    }
    std::fs::create_dir_all(&dir).expect("create output dir");
    dir
}

/// Write `table` as the first worksheet of an .xlsx file.
pub fn write_xlsx(path: &Path, table: &Table) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, header) in table.headers.iter().enumerate() {
        sheet
            .write_string(0, col as u16, header.as_str())
            .expect("write header");
    }
    for (r, row) in table.rows.iter().enumerate() {
        let r = r as u32 + 1;
        for (col, cell) in row.cells.iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Text(s) => {
                    sheet.write_string(r, col, s.as_str()).expect("write text");
                }
                Cell::Number(n) => {
                    sheet.write_number(r, col, *n).expect("write number");
                }
                Cell::Empty => {}
            }
        }
    }
    workbook.save(path).expect("save workbook");
}

/// (width, height) of every page's media box, in points.
pub fn page_sizes(pdf: &[u8]) -> Vec<(f32, f32)> {
    let doc = lopdf::Document::load_mem(pdf).expect("parse generated PDF");
    doc.get_pages()
        .values()
        .map(|&id| {
            let page = doc.get_object(id).and_then(|o| o.as_dict()).expect("page dict");
            let mb = page
                .get(b"MediaBox")
                .and_then(|o| o.as_array())
                .expect("media box");
            let n: Vec<f32> = mb.iter().map(|v| v.as_float().expect("number")).collect();
            (n[2] - n[0], n[3] - n[1])
        })
        .collect()
}

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * 72.0 / 25.4
}
