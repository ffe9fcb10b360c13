use crate::columns::FieldColumns;
use crate::model::{Cell, EMPTY_CELL, Field, LabelFields, Row};

/// Piece counts: rounded to a whole number, `"0"` when missing.
/// Text that is not a number is printed as-is.
pub fn format_count(cell: &Cell) -> String {
    if cell.is_absent() {
        return "0".to_string();
    }
    match cell {
        Cell::Number(n) => round_whole(*n),
        Cell::Text(s) => match parse_number(s) {
            Some(n) => round_whole(n),
            None => s.clone(),
        },
        Cell::Empty => "0".to_string(),
    }
}

/// Weights: exactly two decimals of the parsed binary value, `"0.00"` when
/// missing. Non-numeric text is printed trimmed.
pub fn format_weight(cell: &Cell) -> String {
    if cell.is_absent() {
        return "0.00".to_string();
    }
    match cell {
        Cell::Number(n) => format!("{n:.2}"),
        Cell::Text(s) => match parse_number(s) {
            Some(n) => format!("{n:.2}"),
            None => {
                let t = s.trim();
                if t.is_empty() { "0.00".to_string() } else { t.to_string() }
            }
        },
        Cell::Empty => "0.00".to_string(),
    }
}

/// Gold purity: `18` -> `"18K"`, `"14k"` -> `"14K"`, `"White"` ->
/// `"WhiteK"`. Missing or blank gives an empty line.
pub fn format_karat(cell: &Cell) -> String {
    match cell {
        Cell::Number(n) if !n.is_nan() => format!("{}K", round_whole(*n)),
        Cell::Text(s) => {
            let t = s.trim();
            if t.is_empty() {
                return String::new();
            }
            match parse_number(t) {
                Some(n) => format!("{}K", round_whole(n)),
                None => match t.strip_suffix(['k', 'K']) {
                    Some(stem) => format!("{stem}K"),
                    None => format!("{t}K"),
                },
            }
        }
        _ => String::new(),
    }
}

/// Style and stock code as printed: text unchanged, whole numbers without
/// a trailing `.0`.
pub fn display_text(cell: &Cell) -> String {
    match cell {
        Cell::Empty => String::new(),
        Cell::Text(s) => s.clone(),
        Cell::Number(n) if n.is_nan() => String::new(),
        Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
        Cell::Number(n) => n.to_string(),
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

// Ties go to the even neighbour, so 2.5 pieces prints as 2.
fn round_whole(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    format!("{}", n.round_ties_even() as i64)
}

impl LabelFields {
    pub fn from_row(row: &Row, columns: &FieldColumns) -> Self {
        let cell = |field: Field| match columns.column(field) {
            Some(col) => row.cell(col.position),
            None => &EMPTY_CELL,
        };

        LabelFields {
            style: display_text(cell(Field::Style)),
            karat: format_karat(cell(Field::Karat)),
            diamond: format!(
                "Dia: {} / {}",
                format_count(cell(Field::DiamondPieces)),
                format_weight(cell(Field::DiamondWeight)),
            ),
            gem: format!(
                "Gem: {} / {}",
                format_count(cell(Field::GemPieces)),
                format_weight(cell(Field::GemWeight)),
            ),
            weights: format!(
                "Gross: {} / Net: {}",
                format_weight(cell(Field::GrossWeight)),
                format_weight(cell(Field::NetWeight)),
            ),
            stock_code: display_text(cell(Field::StockCode)),
        }
    }
}
