use std::path::PathBuf;

use crate::columns::FieldAliases;
use crate::error::Error;

pub const MM_PER_INCH: f32 = 25.4;

/// Printed on every sticker to the right of the stock code.
pub const ORIGIN_MARK: &str = "MADE IN UAE";

/// Text sizes per line role, in device pixels at the configured dpi.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSizes {
    pub style: f32,
    pub karat: f32,
    pub text: f32,
    pub bottom: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        FontSizes {
            style: 34.0,
            karat: 32.0,
            text: 30.0,
            bottom: 30.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub dpi: f32,
    pub width_mm: f32,
    pub height_mm: f32,
    pub padding_mm: f32,
    pub line_gap_mm: f32,
    /// Gap between the end of the stock code and the origin mark.
    pub origin_offset_mm: f32,
    pub font_sizes: FontSizes,
    pub aliases: FieldAliases,
    /// Font files tried before the platform defaults.
    pub fonts: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dpi: 300.0,
            width_mm: 50.0,
            height_mm: 25.0,
            padding_mm: 2.4,
            line_gap_mm: 1.0,
            origin_offset_mm: 5.0,
            font_sizes: FontSizes::default(),
            aliases: FieldAliases::default(),
            fonts: Vec::new(),
        }
    }
}

impl Config {
    /// Millimeters to whole device pixels.
    pub fn mm_to_px(&self, mm: f32) -> i32 {
        (mm * self.dpi / MM_PER_INCH).round() as i32
    }

    pub fn validate(&self) -> Result<(), Error> {
        let positive = [
            ("dpi", self.dpi),
            ("label width", self.width_mm),
            ("label height", self.height_mm),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::Config(format!("{name} must be positive, got {value}")));
            }
        }
        let non_negative = [
            ("padding", self.padding_mm),
            ("line gap", self.line_gap_mm),
            ("origin offset", self.origin_offset_mm),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::Config(format!("{name} must not be negative, got {value}")));
            }
        }
        let sizes = &self.font_sizes;
        if [sizes.style, sizes.karat, sizes.text, sizes.bottom]
            .iter()
            .any(|s| !(s.is_finite() && *s > 0.0))
        {
            return Err(Error::Config("font sizes must be positive".into()));
        }

        let geometry = Geometry::new(self);
        if geometry.width < 1 || geometry.height < 1 {
            return Err(Error::Config(format!(
                "{}x{}mm at {} dpi is smaller than one pixel",
                self.width_mm, self.height_mm, self.dpi
            )));
        }
        if geometry.usable_width() < 1 {
            return Err(Error::Config(format!(
                "padding of {}mm leaves no room on a {}mm wide label",
                self.padding_mm, self.width_mm
            )));
        }
        Ok(())
    }
}

/// Label dimensions in device pixels, computed once per run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub width: i32,
    pub height: i32,
    pub padding: i32,
    pub line_gap: i32,
    pub origin_offset: i32,
}

impl Geometry {
    pub fn new(config: &Config) -> Self {
        Geometry {
            width: config.mm_to_px(config.width_mm),
            height: config.mm_to_px(config.height_mm),
            padding: config.mm_to_px(config.padding_mm),
            line_gap: config.mm_to_px(config.line_gap_mm),
            origin_offset: config.mm_to_px(config.origin_offset_mm),
        }
    }

    pub fn usable_width(&self) -> i32 {
        self.width - 2 * self.padding
    }
}
