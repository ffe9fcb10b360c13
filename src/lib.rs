mod columns;
mod config;
mod error;
mod fonts;
mod format;
mod layout;
mod model;
mod pdf;
mod rows;
mod sheet;

pub use columns::{Column, ColumnIndex, FieldAliases, FieldColumns, normalize_header};
pub use config::{Config, FontSizes, Geometry, MM_PER_INCH, ORIGIN_MARK};
pub use error::Error;
pub use fonts::{FONTS_ENV, LabelFont, TextExtent, TrueTypeFont, font_candidates, resolve_font};
pub use format::{display_text, format_count, format_karat, format_weight};
pub use layout::{ELLIPSIS, Label, LabelPlan, PlacedText, Role, fit_text, plan_label, render_label};
pub use model::{Cell, Field, LabelFields, Row, Table};
pub use pdf::assemble;
pub use rows::select_rows;
pub use sheet::{read_table, table_from_range};

use std::path::{Path, PathBuf};
use std::time::Instant;

/// What a successful run produced.
#[derive(Clone, Debug)]
pub struct Summary {
    pub labels: usize,
    pub output: PathBuf,
    pub bytes: usize,
}

/// Filter and format the rows of `table` that become stickers.
pub fn prepare_labels(table: &Table, config: &Config) -> Result<Vec<LabelFields>, Error> {
    let index = ColumnIndex::build(&table.headers);
    let columns = FieldColumns::resolve(&index, &config.aliases);
    let rows = select_rows(table, &columns)?;
    if rows.is_empty() {
        return Err(Error::NoRows);
    }
    Ok(rows
        .iter()
        .map(|row| LabelFields::from_row(row, &columns))
        .collect())
}

/// Rasterize one sticker per entry of `fields`.
pub fn render_labels(
    fields: &[LabelFields],
    font: &LabelFont,
    config: &Config,
) -> Result<Vec<Label>, Error> {
    let geometry = Geometry::new(config);
    fields
        .iter()
        .map(|f| {
            let plan = plan_label(f, font, &geometry, &config.font_sizes);
            render_label(&plan, font, &geometry)
        })
        .collect()
}

/// Table in, PDF bytes out.
pub fn render_stickers(table: &Table, font: &LabelFont, config: &Config) -> Result<Vec<u8>, Error> {
    config.validate()?;
    let fields = prepare_labels(table, config)?;
    let labels = render_labels(&fields, font, config)?;
    assemble(&labels, config.dpi)
}

/// Read `input`, write the sticker PDF to `output`, and optionally a PNG per
/// sticker into `preview_dir`.
pub fn make_stickers(
    input: &Path,
    output: &Path,
    preview_dir: Option<&Path>,
    config: &Config,
) -> Result<Summary, Error> {
    let t0 = Instant::now();
    config.validate()?;

    let table = read_table(input)?;
    let t_read = t0.elapsed();

    let fields = prepare_labels(&table, config)?;
    log::info!("Rows to process: {}", fields.len());
    let t_filter = t0.elapsed();

    let font = resolve_font(&font_candidates(&config.fonts));
    log::debug!("Rendering {} labels with {}", fields.len(), font.name());
    let labels = render_labels(&fields, &font, config)?;
    let t_render = t0.elapsed();

    let bytes = assemble(&labels, config.dpi)?;
    let t_assemble = t0.elapsed();

    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(output, &bytes)?;
    if let Some(dir) = preview_dir {
        write_previews(&labels, dir)?;
    }
    let t_total = t0.elapsed();

    log::info!(
        "Timing: read={:.1}ms, filter={:.1}ms, render={:.1}ms, assemble={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes)",
        t_read.as_secs_f64() * 1000.0,
        (t_filter - t_read).as_secs_f64() * 1000.0,
        (t_render - t_filter).as_secs_f64() * 1000.0,
        (t_assemble - t_render).as_secs_f64() * 1000.0,
        (t_total - t_assemble).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
    );

    Ok(Summary {
        labels: labels.len(),
        output: output.to_path_buf(),
        bytes: bytes.len(),
    })
}

/// `label-0001.png`, `label-0002.png`, ... in sheet order.
pub fn write_previews(labels: &[Label], dir: &Path) -> Result<(), Error> {
    std::fs::create_dir_all(dir)?;
    for (i, label) in labels.iter().enumerate() {
        let path = dir.join(format!("label-{:04}.png", i + 1));
        label
            .image
            .save_with_format(&path, image::ImageFormat::Png)
            .map_err(|e| Error::Io(std::io::Error::other(format!("{}: {e}", path.display()))))?;
    }
    log::debug!("Wrote {} previews to {}", labels.len(), dir.display());
    Ok(())
}
