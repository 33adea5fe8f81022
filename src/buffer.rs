//! Rendering buffer

use crate::color::Rgb8;

/// Owned RGB image data
///
/// Data is stored as row-major order (C-format), 3 bytes per pixel
#[derive(Debug,Default)]
pub struct RenderingBuffer {
    /// Component level data of the image
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
}

impl RenderingBuffer {
    /// Create a new buffer of width and height
    ///
    /// Data for the image is allocated and zeroed
    pub fn new(width: usize, height: usize) -> Self {
        RenderingBuffer {
            width, height, data: vec![0u8; width * height * 3]
        }
    }
    fn offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width, "request {} >= {} width", x, self.width);
        debug_assert!(y < self.height, "request {} >= {} height", y, self.height);
        (y * self.width + x) * 3
    }
    /// Set every pixel to a single color
    pub fn clear(&mut self, color: Rgb8) {
        for px in self.data.chunks_mut(3) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
        }
    }
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgb8) {
        let i = self.offset(x, y);
        self.data[i]     = color.r;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.b;
    }
    pub fn pixel(&self, x: usize, y: usize) -> Rgb8 {
        let i = self.offset(x, y);
        Rgb8::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }
}
