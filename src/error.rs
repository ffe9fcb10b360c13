use std::fmt;
use std::path::PathBuf;

use crate::model::Field;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    MissingInput(PathBuf),
    Spreadsheet(String),
    MissingColumn { field: Field, header: String },
    NoRows,
    EmptyDocument,
    Config(String),
    Raster(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::MissingInput(path) => write!(f, "Spreadsheet not found: {}", path.display()),
            Error::Spreadsheet(msg) => write!(f, "Cannot read spreadsheet: {msg}"),
            Error::MissingColumn { field, header } => write!(
                f,
                "Required column for {field} not found (looked for a header matching \"{header}\")"
            ),
            Error::NoRows => write!(f, "No rows to create stickers: every row lacks a style or stock code"),
            Error::EmptyDocument => write!(f, "No labels to write"),
            Error::Config(msg) => write!(f, "Invalid configuration: {msg}"),
            Error::Raster(msg) => write!(f, "Cannot render label: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<calamine::Error> for Error {
    fn from(e: calamine::Error) -> Self {
        Error::Spreadsheet(e.to_string())
    }
}
