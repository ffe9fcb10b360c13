use std::fmt;
use std::str::FromStr;

pub(crate) static EMPTY_CELL: Cell = Cell::Empty;

/// A single spreadsheet cell after import.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    /// Empty cells, whitespace-only text and NaN all count as absent.
    pub fn is_absent(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(n) => n.is_nan(),
        }
    }

    /// Trim text and fold the "no value" spellings into `Empty`.
    pub(crate) fn normalized(&self) -> Cell {
        match self {
            Cell::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
                    Cell::Empty
                } else {
                    Cell::Text(trimmed.to_string())
                }
            }
            Cell::Number(n) if n.is_nan() => Cell::Empty,
            other => other.clone(),
        }
    }
}

/// One data row, positionally aligned with `Table::headers`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Row { cells }
    }

    /// Cell at `position`; rows shorter than the header list read as empty.
    pub fn cell(&self, position: usize) -> &Cell {
        self.cells.get(position).unwrap_or(&EMPTY_CELL)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

/// The logical columns a sticker is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Style,
    Karat,
    DiamondPieces,
    DiamondWeight,
    GemPieces,
    GemWeight,
    GrossWeight,
    NetWeight,
    StockCode,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Style,
        Field::Karat,
        Field::DiamondPieces,
        Field::DiamondWeight,
        Field::GemPieces,
        Field::GemWeight,
        Field::GrossWeight,
        Field::NetWeight,
        Field::StockCode,
    ];

    pub(crate) fn slot(self) -> usize {
        self as usize
    }

    /// Identifier used on the command line (`--header dia-wt=...`).
    pub fn id(self) -> &'static str {
        match self {
            Field::Style => "style",
            Field::Karat => "type",
            Field::DiamondPieces => "dia-pcs",
            Field::DiamondWeight => "dia-wt",
            Field::GemPieces => "gem-pcs",
            Field::GemWeight => "gem-wt",
            Field::GrossWeight => "gross-wt",
            Field::NetWeight => "net-wt",
            Field::StockCode => "stock-code",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Style => "style",
            Field::Karat => "type",
            Field::DiamondPieces => "diamond piece count",
            Field::DiamondWeight => "diamond weight",
            Field::GemPieces => "gem piece count",
            Field::GemWeight => "gem weight",
            Field::GrossWeight => "gross weight",
            Field::NetWeight => "net weight",
            Field::StockCode => "stock code",
        };
        f.write_str(name)
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Field::ALL
            .into_iter()
            .find(|f| f.id() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Field::ALL.iter().map(|f| f.id()).collect();
                format!("unknown field \"{s}\" (expected one of: {})", known.join(", "))
            })
    }
}

/// Display strings for one sticker, already formatted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelFields {
    pub style: String,
    pub karat: String,
    pub diamond: String,
    pub gem: String,
    pub weights: String,
    pub stock_code: String,
}
