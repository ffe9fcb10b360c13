mod builtin;

use std::path::{Path, PathBuf};

use memmap2::Mmap;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};
use ttf_parser::{Face, GlyphId, OutlineBuilder};

/// Extra font files, searched before the platform defaults.
pub const FONTS_ENV: &str = "STICKER_SHEET_FONTS";

/// Horizontal advance and ink height of a run of text, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

pub struct TrueTypeFont {
    path: PathBuf,
    data: Mmap,
}

impl TrueTypeFont {
    fn face(&self) -> Option<Face<'_>> {
        Face::parse(&self.data, 0).ok()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The face every label is drawn with.
pub enum LabelFont {
    TrueType(TrueTypeFont),
    /// Bitmap glyphs compiled into the binary; always available.
    Builtin,
}

impl LabelFont {
    pub fn name(&self) -> String {
        match self {
            LabelFont::TrueType(f) => f.path().display().to_string(),
            LabelFont::Builtin => "built-in 5x7".to_string(),
        }
    }

    pub fn measure(&self, text: &str, size: f32) -> TextExtent {
        match self {
            LabelFont::TrueType(f) => match f.face() {
                Some(face) => measure_face(&face, text, size),
                None => TextExtent::default(),
            },
            LabelFont::Builtin => builtin::measure(text, size),
        }
    }

    /// Paint `text` in black with the top of its line box at `y`.
    pub fn draw(&self, pixmap: &mut Pixmap, text: &str, size: f32, x: f32, y: f32) {
        if text.is_empty() {
            return;
        }
        let mut paint = Paint::default();
        paint.set_color_rgba8(0, 0, 0, 255);
        paint.anti_alias = true;

        match self {
            LabelFont::TrueType(f) => {
                let Some(face) = f.face() else {
                    return;
                };
                let scale = size / face.units_per_em() as f32;
                let mut sink = PathSink {
                    builder: PathBuilder::new(),
                    pen_x: x,
                    baseline: y + face.ascender() as f32 * scale,
                    scale,
                };
                for ch in text.chars() {
                    let gid = face.glyph_index(ch).unwrap_or(GlyphId(0));
                    face.outline_glyph(gid, &mut sink);
                    sink.pen_x += face.glyph_hor_advance(gid).unwrap_or(0) as f32 * scale;
                }
                if let Some(path) = sink.builder.finish() {
                    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
                }
            }
            LabelFont::Builtin => builtin::draw(pixmap, text, size, x, y, &paint),
        }
    }
}

fn measure_face(face: &Face, text: &str, size: f32) -> TextExtent {
    let scale = size / face.units_per_em() as f32;
    let mut width = 0.0f32;
    let mut ink: Option<(i16, i16)> = None;
    for ch in text.chars() {
        let gid = face.glyph_index(ch).unwrap_or(GlyphId(0));
        width += face.glyph_hor_advance(gid).unwrap_or(0) as f32 * scale;
        if let Some(bb) = face.glyph_bounding_box(gid) {
            ink = Some(match ink {
                Some((lo, hi)) => (lo.min(bb.y_min), hi.max(bb.y_max)),
                None => (bb.y_min, bb.y_max),
            });
        }
    }
    let height = ink
        .map(|(lo, hi)| (hi as f32 - lo as f32) * scale)
        .unwrap_or(0.0);
    TextExtent { width, height }
}

/// Feeds glyph outlines (font units, y up) into a device-space path (y down).
struct PathSink {
    builder: PathBuilder,
    pen_x: f32,
    baseline: f32,
    scale: f32,
}

impl PathSink {
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.pen_x + x * self.scale, self.baseline - y * self.scale)
    }
}

impl OutlineBuilder for PathSink {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x, y) = self.map(x, y);
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x2, y2) = self.map(x2, y2);
        let (x, y) = self.map(x, y);
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

/// Candidate font files in search order: `STICKER_SHEET_FONTS`, then
/// `extra`, then the usual sans-serif locations for this platform.
pub fn font_candidates(extra: &[PathBuf]) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();

    if let Ok(val) = std::env::var(FONTS_ENV) {
        let sep = if cfg!(windows) { ';' } else { ':' };
        for part in val.split(sep) {
            let trimmed = part.trim();
            if !trimmed.is_empty() {
                candidates.push(PathBuf::from(trimmed));
            }
        }
    }

    candidates.extend(extra.iter().cloned());

    #[cfg(target_os = "windows")]
    {
        let fonts = std::env::var("WINDIR")
            .map(|w| PathBuf::from(w).join("Fonts"))
            .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Fonts"));
        candidates.push(fonts.join("arial.ttf"));
        candidates.push(fonts.join("calibri.ttf"));
    }

    #[cfg(target_os = "linux")]
    {
        candidates.extend([
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf".into(),
            "/usr/share/fonts/TTF/DejaVuSans.ttf".into(),
            "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf".into(),
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf".into(),
            "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf".into(),
        ]);
    }

    #[cfg(target_os = "macos")]
    {
        candidates.extend([
            "/Library/Fonts/Arial.ttf".into(),
            "/System/Library/Fonts/Supplemental/Arial.ttf".into(),
        ]);
    }

    candidates
}

/// First candidate that opens and parses wins; the built-in glyphs otherwise.
pub fn resolve_font(candidates: &[PathBuf]) -> LabelFont {
    match candidates.iter().find_map(|path| load_truetype(path)) {
        Some(font) => {
            log::info!("Using font {}", font.path().display());
            LabelFont::TrueType(font)
        }
        None => {
            log::warn!(
                "No usable font among {} candidates; using built-in glyphs",
                candidates.len()
            );
            LabelFont::Builtin
        }
    }
}

fn load_truetype(path: &Path) -> Option<TrueTypeFont> {
    if !path.is_file() {
        log::debug!("Font candidate missing: {}", path.display());
        return None;
    }
    let file = std::fs::File::open(path)
        .inspect_err(|e| log::debug!("Cannot open {}: {e}", path.display()))
        .ok()?;
    let data = unsafe { Mmap::map(&file) }
        .inspect_err(|e| log::debug!("Cannot map {}: {e}", path.display()))
        .ok()?;
    if let Err(e) = Face::parse(&data, 0) {
        log::debug!("Not a usable font {}: {e}", path.display());
        return None;
    }
    Some(TrueTypeFont {
        path: path.to_path_buf(),
        data,
    })
}
