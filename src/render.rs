//! Mapping spans onto a rendering buffer
//!
//! This is the caller side of the core: the fill itself never touches
//! pixels. Only the pixels of a span that land inside the buffer are
//! written; the rest are skipped.

use crate::buffer::RenderingBuffer;
use crate::color::Rgb8;
use crate::scan::{fill, Span};
use crate::vertex::Vertex;

/// Write every in-bounds pixel of each span
pub fn render_spans(spans: &[Span], color: Rgb8, buf: &mut RenderingBuffer) {
    let (w, h) = (buf.width as i64, buf.height as i64);
    for s in spans {
        if s.y < 0 || s.y >= h {
            continue;
        }
        for x in s.x1 ..= s.x2 {
            if x < 0 || x >= w {
                continue;
            }
            buf.set_pixel(x as usize, s.y as usize, color);
        }
    }
}

/// Fill a polygon directly into a buffer
pub fn render_polygon(polygon: &[Vertex], color: Rgb8, buf: &mut RenderingBuffer) {
    let spans = fill(polygon, buf.height as i64, buf.width as i64);
    render_spans(&spans, color, buf);
}
