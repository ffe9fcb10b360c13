use image::RgbImage;
use tiny_skia::{Color, Pixmap};

use crate::config::{FontSizes, Geometry, ORIGIN_MARK};
use crate::error::Error;
use crate::fonts::LabelFont;
use crate::model::LabelFields;

pub const ELLIPSIS: char = '\u{2026}';

/// Shorten `text` until `measure` reports it fits in `max_width`.
///
/// Each step drops two characters and appends an ellipsis, so the text loses
/// one character net. A two-character text loses its last character instead,
/// and a single character is left alone even if it is still too wide.
pub fn fit_text(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    while chars.len() > 1 && measure(&chars.iter().collect::<String>()) > max_width {
        if chars.len() > 2 {
            chars.truncate(chars.len() - 2);
            chars.push(ELLIPSIS);
        } else {
            chars.truncate(1);
        }
    }
    chars.into_iter().collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Style,
    Karat,
    Diamond,
    Gem,
    Weights,
    StockCode,
    Origin,
}

/// One run of text at its final position. `y` is the top of the line box.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedText {
    pub role: Role,
    pub text: String,
    pub size: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Where everything on one sticker goes, before any pixels are touched.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelPlan {
    pub runs: Vec<PlacedText>,
}

impl LabelPlan {
    pub fn run(&self, role: Role) -> Option<&PlacedText> {
        self.runs.iter().find(|r| r.role == role)
    }
}

/// Stack the five text lines from the top padding down, then pin the stock
/// code and origin mark below them without crossing the bottom padding.
/// A long stock code is ellipsized so the origin mark stays inside the right
/// padding.
pub fn plan_label(
    fields: &LabelFields,
    font: &LabelFont,
    geometry: &Geometry,
    sizes: &FontSizes,
) -> LabelPlan {
    let x = geometry.padding as f32;
    let max_w = geometry.usable_width() as f32;
    let gap = geometry.line_gap as f32;

    let place = |role: Role, text: &str, size: f32, x: f32, y: f32, max_w: f32| {
        let fitted = fit_text(text, max_w, |t| font.measure(t, size).width);
        let extent = font.measure(&fitted, size);
        PlacedText {
            role,
            text: fitted,
            size,
            x,
            y,
            width: extent.width,
            height: extent.height,
        }
    };

    let stacked = [
        (Role::Style, fields.style.as_str(), sizes.style),
        (Role::Karat, fields.karat.as_str(), sizes.karat),
        (Role::Diamond, fields.diamond.as_str(), sizes.text),
        (Role::Gem, fields.gem.as_str(), sizes.text),
        (Role::Weights, fields.weights.as_str(), sizes.text),
    ];

    let mut runs = Vec::with_capacity(stacked.len() + 2);
    let mut y = geometry.padding as f32;
    for (i, (role, text, size)) in stacked.into_iter().enumerate() {
        if i > 0 {
            y += gap;
        }
        let run = place(role, text, size, x, y, max_w);
        y += run.height;
        runs.push(run);
    }

    // The bottom row shares one usable width: the stock code gives way to
    // the offset and the full origin mark, which then takes what is left.
    let offset = geometry.origin_offset as f32;
    let mark_w = font.measure(ORIGIN_MARK, sizes.bottom).width;
    let stock_max = (max_w - offset - mark_w).max(0.0);
    let stock = place(Role::StockCode, &fields.stock_code, sizes.bottom, x, 0.0, stock_max);
    let max_bottom = (geometry.height - geometry.padding) as f32 - stock.height;
    let bottom_y = (y + gap).min(max_bottom);
    let origin_x = x + stock.width + offset;
    let origin_max = (x + max_w - origin_x).max(0.0);
    let origin = place(Role::Origin, ORIGIN_MARK, sizes.bottom, origin_x, bottom_y, origin_max);

    runs.push(PlacedText { y: bottom_y, ..stock });
    runs.push(origin);

    LabelPlan { runs }
}

/// A finished sticker: an RGB raster of `Geometry::width` x `Geometry::height`.
#[derive(Clone, Debug)]
pub struct Label {
    pub image: RgbImage,
}

impl Label {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

pub fn render_label(plan: &LabelPlan, font: &LabelFont, geometry: &Geometry) -> Result<Label, Error> {
    let (w, h) = (geometry.width as u32, geometry.height as u32);
    let mut pixmap = Pixmap::new(w, h)
        .ok_or_else(|| Error::Raster(format!("cannot allocate a {w}x{h} canvas")))?;
    pixmap.fill(Color::WHITE);

    for run in &plan.runs {
        font.draw(&mut pixmap, &run.text, run.size, run.x, run.y);
    }

    // Canvas is opaque, so premultiplied RGBA is plain RGBA here.
    let rgb: Vec<u8> = pixmap
        .data()
        .chunks_exact(4)
        .flat_map(|p| [p[0], p[1], p[2]])
        .collect();
    let image = RgbImage::from_raw(w, h, rgb)
        .ok_or_else(|| Error::Raster("canvas size does not match pixel data".into()))?;
    Ok(Label { image })
}
