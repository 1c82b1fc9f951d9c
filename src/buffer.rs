//! Rendering buffer

use crate::color::Rgb8;
use crate::error::Result;

use std::path::Path;

/// Rendering Buffer
///
/// Data is stored as row-major order (C-format)
#[derive(Debug,Default,Clone,PartialEq)]
pub struct RenderingBuffer {
    /// Pixel / Component level data of Image
    pub data: Vec<u8>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
    /// Bytes per pixel or number of color components
    pub bpp: usize,
}

impl RenderingBuffer {
    /// Create a new buffer of width, height, and bpp
    ///
    /// Data for the Image is allocated and set to zero
    pub fn new(width: usize, height: usize, bpp: usize) -> Self {
        RenderingBuffer {
            width, height, bpp, data: vec![0u8; width * height * bpp]
        }
    }
    /// Size of underlying Rendering Buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Return components of row `i`
    pub fn row(&self, i: usize) -> &[u8] {
        debug_assert!(i < self.height);
        let n = self.width * self.bpp;
        &self.data[i * n .. (i + 1) * n]
    }
    /// Set every component to `v`
    pub fn clear(&mut self, v: u8) {
        self.data.iter_mut().for_each(|c| *c = v);
    }
    /// Set every pixel to `c`
    ///
    ///     use texraster::{RenderingBuffer, Rgb8};
    ///
    ///     let mut buf = RenderingBuffer::new(2, 2, 3);
    ///     buf.fill(Rgb8::magenta());
    ///     assert_eq!(buf.pixel(1, 1), Some(Rgb8::magenta()));
    ///
    pub fn fill(&mut self, c: Rgb8) {
        if self.bpp < 3 {
            let gray = ((u32::from(c.r) + u32::from(c.g) + u32::from(c.b)) / 3) as u8;
            self.clear(gray);
            return;
        }
        for p in self.data.chunks_mut(self.bpp) {
            p[0] = c.r;
            p[1] = c.g;
            p[2] = c.b;
        }
    }
    /// Color at (`x`,`y`), None if outside of the buffer
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let p = &self[(x,y)];
        if self.bpp < 3 {
            Some(Rgb8::gray(p[0]))
        } else {
            Some(Rgb8::new(p[0], p[1], p[2]))
        }
    }
    /// Copy color `c` to (`x`,`y`)
    ///
    /// Locations outside of the buffer, including negative ones, are ignored
    pub fn set_pixel(&mut self, x: i64, y: i64, c: Rgb8) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let bpp = self.bpp;
        let p = &mut self[(x as usize, y as usize)];
        if bpp < 3 {
            p[0] = c.r;
        } else {
            p[0] = c.r;
            p[1] = c.g;
            p[2] = c.b;
        }
    }
    /// Write the buffer to an image file, format from the extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        crate::imgfile::write_file(&self.data, self.width, self.height, self.bpp, filename)
    }
}

use std::ops::Index;
use std::ops::IndexMut;

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = [u8];
    fn index(&self, index: (usize, usize)) -> &[u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        let i = ((index.1 * self.width) + index.0) * self.bpp;
        &self.data[i .. i + self.bpp]
    }
}
impl IndexMut<(usize,usize)> for RenderingBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        let i = ((index.1 * self.width) + index.0) * self.bpp;
        let bpp = self.bpp;
        &mut self.data[i .. i + bpp]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let mut buf = RenderingBuffer::new(4, 3, 3);
        assert_eq!(buf.len(), 36);
        assert_eq!(buf.pixel(0, 0), Some(Rgb8::black()));
        buf.set_pixel(3, 2, Rgb8::new(1,2,3));
        assert_eq!(buf.pixel(3, 2), Some(Rgb8::new(1,2,3)));
        assert_eq!(&buf[(3,2)], &[1,2,3]);
        assert_eq!(buf.row(2), &[0,0,0, 0,0,0, 0,0,0, 1,2,3]);
        // Ignored
        buf.set_pixel(-1, 0, Rgb8::white());
        buf.set_pixel(4, 0, Rgb8::white());
        buf.set_pixel(0, 3, Rgb8::white());
        assert!(buf.data.iter().filter(|&&c| c == 255).count() == 0);
        assert_eq!(buf.pixel(4, 0), None);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let buf = RenderingBuffer::new(4, 3, 3);
        let _ = &buf[(4,0)];
    }
}
