//! Colors

use crate::math::lerp_u8;

/// Color as Red, Green, Blue
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    pub fn white() -> Self {
        Self::new(255,255,255)
    }
    pub fn black() -> Self {
        Self::new(0,0,0)
    }
    /// Magenta (255,0,255), written where no source texture is bound
    pub fn magenta() -> Self {
        Self::new(255,0,255)
    }
    pub fn gray(g: u8) -> Self {
        Self::new(g,g,g)
    }
    /// Blend `c` over this color with an 8-bit `cover`
    ///
    ///     use texraster::Rgb8;
    ///
    ///     let bg = Rgb8::black();
    ///     assert_eq!(bg.blend(Rgb8::white(), 255), Rgb8::white());
    ///     assert_eq!(bg.blend(Rgb8::white(), 0), bg);
    ///     assert_eq!(bg.blend(Rgb8::white(), 128), Rgb8::gray(128));
    ///
    pub fn blend(self, c: Rgb8, cover: u8) -> Self {
        Self::new(lerp_u8(self.r, c.r, cover),
                  lerp_u8(self.g, c.g, cover),
                  lerp_u8(self.b, c.b, cover))
    }
}

/// Color as Red, Green, Blue, and Alpha
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgba8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba8 {
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255,255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Self::new(0,0,0,255)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
}

impl From<Rgba8> for Rgb8 {
    fn from(c: Rgba8) -> Rgb8 {
        Rgb8::new( c.r, c.g, c.b )
    }
}
impl From<Rgb8> for Rgba8 {
    fn from(c: Rgb8) -> Rgba8 {
        Rgba8::new( c.r, c.g, c.b, 255 )
    }
}
