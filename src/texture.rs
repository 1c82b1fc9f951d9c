//! Source textures
//!
//! Texture data is addressed by integer texel and wraps around on
//! coordinates outside of the image in both directions.

use crate::color::{Rgb8, Rgba8};
use crate::error::{Error, Result};
use crate::math::Vector2;

use log::debug;
use std::path::Path;

/// Decoded 8-bit texture
#[derive(Debug,Clone,PartialEq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    /// Components per texel, 1 (gray), 2 (gray, alpha), 3 (rgb) or 4 (rgba)
    pub components: usize,
    pub data: Vec<u8>,
}

impl TextureData {
    /// Create a new texture from row-major texel data
    ///
    ///     use texraster::{TextureData, Rgb8};
    ///
    ///     let tex = TextureData::new(2, 1, 3, vec![255,0,0, 0,0,255]).unwrap();
    ///     assert_eq!(tex.texel(1, 0), Rgb8::new(0,0,255));
    ///     assert_eq!(tex.texel(2, 0), Rgb8::new(255,0,0)); // Wraps around
    ///     assert_eq!(tex.texel(-1, 0), Rgb8::new(0,0,255));
    ///
    pub fn new(width: u32, height: u32, components: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidTexture(format!("empty texture {}x{}", width, height)));
        }
        if components == 0 || components > 4 {
            return Err(Error::InvalidTexture(format!("{} components per texel", components)));
        }
        let n = width as usize * height as usize * components;
        if data.len() != n {
            return Err(Error::InvalidTexture(format!("{}x{}x{} texture with {} bytes",
                                                     width, height, components, data.len())));
        }
        Ok(Self { width, height, components, data })
    }
    /// Create a new texture from a decoded image, keeping its channel count
    pub fn from_image(img: image::DynamicImage) -> Result<Self> {
        let (width, height) = (img.width(), img.height());
        let (components, data) = match img.color().channel_count() {
            1 => (1, img.to_luma8().into_raw()),
            2 => (2, img.to_luma_alpha8().into_raw()),
            3 => (3, img.to_rgb8().into_raw()),
            _ => (4, img.to_rgba8().into_raw()),
        };
        Self::new(width, height, components, data)
    }
    /// Load a texture from an image file
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self> {
        let filename = filename.as_ref();
        let tex = Self::from_image(image::open(filename)?)?;
        debug!("texture {:?}: {}x{} {} bpp", filename, tex.width, tex.height, tex.components * 8);
        Ok(tex)
    }
    fn texel_slice(&self, x: i64, y: i64) -> &[u8] {
        let x = x.rem_euclid(i64::from(self.width)) as usize;
        let y = y.rem_euclid(i64::from(self.height)) as usize;
        let i = (x + y * self.width as usize) * self.components;
        &self.data[i .. i + self.components]
    }
    /// Color of texel (`x`,`y`), coordinates wrap around
    pub fn texel(&self, x: i64, y: i64) -> Rgb8 {
        let p = self.texel_slice(x, y);
        match self.components {
            1 | 2 => Rgb8::gray(p[0]),
            _ => Rgb8::new(p[0], p[1], p[2]),
        }
    }
    /// Color and alpha of texel (`x`,`y`), opaque without an alpha channel
    pub fn texel_rgba(&self, x: i64, y: i64) -> Rgba8 {
        let p = self.texel_slice(x, y);
        match self.components {
            1 => Rgba8::new(p[0], p[0], p[0], 255),
            2 => Rgba8::new(p[0], p[0], p[0], p[1]),
            3 => Rgba8::from(Rgb8::new(p[0], p[1], p[2])),
            _ => Rgba8::new(p[0], p[1], p[2], p[3]),
        }
    }
    fn uv_to_texel(&self, uv: Vector2) -> (i64, i64) {
        ((uv.x * f64::from(self.width)) as i64,
         (uv.y * f64::from(self.height)) as i64)
    }
    /// Nearest texel to texture coordinate `uv`, in [0,1] across the texture
    pub fn sample_uv(&self, uv: Vector2) -> Rgb8 {
        let (sx, sy) = self.uv_to_texel(uv);
        self.texel(sx, sy)
    }
    /// Nearest texel with alpha, see [sample_uv](#method.sample_uv)
    pub fn sample_uv_rgba(&self, uv: Vector2) -> Rgba8 {
        let (sx, sy) = self.uv_to_texel(uv);
        self.texel_rgba(sx, sy)
    }
}
