use std::collections::HashMap;

use crate::model::Field;

/// Canonical header key: NBSP folded to space, whitespace runs collapsed,
/// trimmed, lowercased.
pub fn normalize_header(raw: &str) -> String {
    raw.replace('\u{A0}', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Which normalized header text each logical field is read from.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldAliases {
    headers: [String; 9],
}

impl Default for FieldAliases {
    fn default() -> Self {
        FieldAliases {
            headers: Field::ALL.map(|f| default_alias(f).to_string()),
        }
    }
}

fn default_alias(field: Field) -> &'static str {
    match field {
        Field::Style => "style no",
        Field::Karat => "type",
        Field::DiamondPieces => "dia pcs",
        Field::DiamondWeight => "dia wt",
        Field::GemPieces => "gem stone pcs",
        Field::GemWeight => "gem stone wt",
        Field::GrossWeight => "gross wt",
        Field::NetWeight => "net wt",
        Field::StockCode => "stock code",
    }
}

impl FieldAliases {
    /// Replace the header text for one field. The text is normalized here so
    /// callers can pass it as it appears in the sheet.
    pub fn with(mut self, field: Field, header: &str) -> Self {
        self.headers[field.slot()] = normalize_header(header);
        self
    }

    pub fn header(&self, field: Field) -> &str {
        &self.headers[field.slot()]
    }
}

/// A column of the input table as it was spelled in the header row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub position: usize,
    pub header: String,
}

/// Normalized header key -> original column, built once per table.
#[derive(Clone, Debug, Default)]
pub struct ColumnIndex {
    columns: HashMap<String, Column>,
}

impl ColumnIndex {
    pub fn build<S: AsRef<str>>(headers: &[S]) -> Self {
        let mut columns = HashMap::new();
        for (position, header) in headers.iter().enumerate() {
            let header = header.as_ref();
            let key = normalize_header(header);
            let column = Column {
                position,
                header: header.to_string(),
            };
            if let Some(previous) = columns.insert(key.clone(), column) {
                log::warn!(
                    "Headers \"{}\" and \"{}\" both normalize to \"{key}\"; using the later one",
                    previous.header,
                    header,
                );
            }
        }
        ColumnIndex { columns }
    }

    /// Look up an already-normalized key.
    pub fn get(&self, key: &str) -> Option<&Column> {
        self.columns.get(key)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Every logical field resolved against one table's headers.
#[derive(Clone, Debug)]
pub struct FieldColumns {
    resolved: [Option<Column>; 9],
    aliases: FieldAliases,
}

impl FieldColumns {
    pub fn resolve(index: &ColumnIndex, aliases: &FieldAliases) -> Self {
        let resolved = Field::ALL.map(|field| index.get(aliases.header(field)).cloned());
        for field in Field::ALL {
            match &resolved[field.slot()] {
                Some(col) => log::debug!("{field}: column {} \"{}\"", col.position, col.header),
                None => log::debug!("{field}: no column matching \"{}\"", aliases.header(field)),
            }
        }
        FieldColumns {
            resolved,
            aliases: aliases.clone(),
        }
    }

    /// The column a field reads from, or `None` when the sheet has no such header.
    pub fn column(&self, field: Field) -> Option<&Column> {
        self.resolved[field.slot()].as_ref()
    }

    /// Header text that was searched for `field`.
    pub fn wanted(&self, field: Field) -> &str {
        self.aliases.header(field)
    }
}
