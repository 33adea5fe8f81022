//! Writing of rendered buffers to image files
//!
//! See <https://en.wikipedia.org/wiki/Netpbm_format#PPM_example>
//!
use std::path::Path;

use crate::buffer::RenderingBuffer;

pub fn write_file<P: AsRef<Path>>(buf: &RenderingBuffer, filename: P) -> Result<(), std::io::Error> {
    image::save_buffer(filename, &buf.data, buf.width as u32, buf.height as u32, image::RGB(8))
}

pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<RenderingBuffer, image::ImageError> {
    let img = image::open(filename)?.to_rgb();
    let (w, h) = img.dimensions();
    Ok(RenderingBuffer {
        data: img.into_raw(),
        width: w as usize,
        height: h as usize,
    })
}

pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool, image::ImageError> {
    let a = read_file(f1)?;
    let b = read_file(f2)?;
    if a.width != b.width || a.height != b.height {
        return Ok(false);
    }
    Ok(a.data == b.data)
}
