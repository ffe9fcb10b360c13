use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sticker_sheet::{Config, Field};

/// Turn an inventory spreadsheet into a PDF of 50x25mm jewelry stickers.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Spreadsheet to read (.xlsx, .xlsm, .xls or .ods); the first sheet is used
    input: PathBuf,

    /// Where to write the PDF [default: stickers.pdf next to the input]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Raster resolution in dots per inch
    #[arg(long, default_value_t = 300.0)]
    dpi: f32,

    #[arg(long, default_value_t = 50.0)]
    width_mm: f32,

    #[arg(long, default_value_t = 25.0)]
    height_mm: f32,

    #[arg(long, default_value_t = 2.4)]
    padding_mm: f32,

    #[arg(long, default_value_t = 1.0)]
    line_gap_mm: f32,

    /// Space between the stock code and "MADE IN UAE"
    #[arg(long, default_value_t = 5.0)]
    offset_mm: f32,

    /// Font file to try before the system defaults (repeatable).
    /// Paths listed in STICKER_SHEET_FONTS are tried first.
    #[arg(long = "font", value_name = "PATH")]
    fonts: Vec<PathBuf>,

    /// Read a field from a differently named column, e.g. `stock-code="Tag No"`
    #[arg(long = "header", value_name = "FIELD=TEXT", value_parser = parse_header)]
    headers: Vec<(Field, String)>,

    /// Also write one PNG per sticker into this directory
    #[arg(long, value_name = "DIR")]
    preview_dir: Option<PathBuf>,
}

fn parse_header(s: &str) -> Result<(Field, String), String> {
    let (field, text) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=TEXT, got \"{s}\""))?;
    let text = text.trim().trim_matches('"');
    if text.is_empty() {
        return Err(format!("empty header text for {field}"));
    }
    Ok((field.parse()?, text.to_string()))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_file_name("stickers.pdf"));

    let defaults = Config::default();
    let aliases = cli
        .headers
        .iter()
        .fold(defaults.aliases.clone(), |a, (field, text)| a.with(*field, text));
    let config = Config {
        dpi: cli.dpi,
        width_mm: cli.width_mm,
        height_mm: cli.height_mm,
        padding_mm: cli.padding_mm,
        line_gap_mm: cli.line_gap_mm,
        origin_offset_mm: cli.offset_mm,
        aliases,
        fonts: cli.fonts,
        ..defaults
    };

    match sticker_sheet::make_stickers(&cli.input, &output, cli.preview_dir.as_deref(), &config) {
        Ok(summary) => {
            println!("Rows to process: {}", summary.labels);
            println!("Saved: {}", summary.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
