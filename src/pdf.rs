use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref};

use crate::config::MM_PER_INCH;
use crate::error::Error;
use crate::layout::Label;

const POINTS_PER_INCH: f32 = 72.0;

/// One page per label, in order. Each page is exactly the label's physical
/// size: pixels at `dpi` converted to points.
pub fn assemble(labels: &[Label], dpi: f32) -> Result<Vec<u8>, Error> {
    if labels.is_empty() {
        return Err(Error::EmptyDocument);
    }

    let t0 = std::time::Instant::now();
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let mut page_ids = Vec::with_capacity(labels.len());
    let mut image_bytes = 0usize;

    for label in labels {
        let page_id = alloc();
        let content_id = alloc();
        let xobj_id = alloc();
        page_ids.push(page_id);

        let (w, h) = (label.width(), label.height());
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(label.image.as_raw(), 6);
        image_bytes += compressed.len();

        {
            let mut xobj = pdf.image_xobject(xobj_id, &compressed);
            xobj.filter(Filter::FlateDecode);
            xobj.width(w as i32);
            xobj.height(h as i32);
            xobj.color_space().device_rgb();
            xobj.bits_per_component(8);
        }

        let page_w = w as f32 * POINTS_PER_INCH / dpi;
        let page_h = h as f32 * POINTS_PER_INCH / dpi;

        let mut content = Content::new();
        content.save_state();
        content.transform([page_w, 0.0, 0.0, page_h, 0.0, 0.0]);
        content.x_object(Name(b"Im1"));
        content.restore_state();
        let raw = content.finish();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
        pdf.stream(content_id, &compressed).filter(Filter::FlateDecode);

        let mut page = pdf.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, page_w, page_h))
            .parent(pages_id)
            .contents(content_id);
        page.resources().x_objects().pair(Name(b"Im1"), xobj_id);
    }

    let n = page_ids.len() as i32;
    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id).kids(page_ids).count(n);

    let first = &labels[0];
    log::debug!(
        "Assembled {} pages of {:.1}x{:.1}mm, {} image bytes in {:.1}ms",
        n,
        first.width() as f32 * MM_PER_INCH / dpi,
        first.height() as f32 * MM_PER_INCH / dpi,
        image_bytes,
        t0.elapsed().as_secs_f64() * 1000.0,
    );

    Ok(pdf.finish())
}
