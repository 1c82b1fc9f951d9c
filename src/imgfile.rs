//! Reading and writing of image files
//!
//! Formats are chosen by the `image` crate from the file extension,
//! e.g. `.tga`, `.png`, `.ppm`
//!
use crate::error::{Error, Result};

use log::{debug, warn};
use std::path::Path;

/// Read an image as 8-bit RGB, returning (data, width, height)
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize)> {
    let img = image::open(filename)?.to_rgb8();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}

/// Write 8-bit pixel data with `bpp` components (1, 3 or 4) to an image file
pub fn write_file<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, bpp: usize, filename: P) -> Result<()> {
    let kind = match bpp {
        1 => image::ExtendedColorType::L8,
        3 => image::ExtendedColorType::Rgb8,
        4 => image::ExtendedColorType::Rgba8,
        _ => return Err(Error::InvalidTexture(format!("cannot write {} components per pixel", bpp))),
    };
    debug!("writing {}x{} image to {:?}", width, height, filename.as_ref());
    image::save_buffer(filename, buf, width as u32, height as u32, kind)?;
    Ok(())
}

/// Compare two image files pixel by pixel
///
/// Differences are logged as warnings
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        warn!("image sizes differ: {}x{} {}x{}", w1, h1, w2, h2);
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            warn!("{} [{},{},{}]: {} {}", i, (i/3)%w1,(i/3)/w1,i%3, v1,v2);
            flag = false;
        }
    }
    Ok(flag)
}
