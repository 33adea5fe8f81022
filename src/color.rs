//! Colors

/// Convert an f64 [0,1] component to a u8 [0,255] component
pub fn cu8(v: f64) -> u8 {
    (v * 255.0).round() as u8
}

/// Color as Red, Green, Blue
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgb8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb8 {
    /// White Color (255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255)
    }
    /// Black Color (0,0,0)
    pub fn black() -> Self {
        Self::new(0,0,0)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    /// Create a color from components in [0,1]
    pub fn from_components(r: f64, g: f64, b: f64) -> Self {
        Rgb8::new(cu8(r), cu8(g), cu8(b))
    }
}
