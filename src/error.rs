//! Error types

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Reading or writing a file failed
    Io(std::io::Error),
    /// Decoding or encoding an image failed
    Image(image::ImageError),
    /// Triangle has zero area; no affine basis for its attributes
    DegenerateTriangle,
    /// Texture data does not match its declared dimensions
    InvalidTexture(String),
    /// Atlas description cannot be rasterized
    InvalidAtlas(String),
    /// Mesh refers to a texture index that was never provided
    MissingTexture(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::Image(e) => write!(f, "Image error: {}", e),
            Error::DegenerateTriangle => write!(f, "Degenerate triangle: zero area, gradients undefined"),
            Error::InvalidTexture(msg) => write!(f, "Invalid texture: {}", msg),
            Error::InvalidAtlas(msg) => write!(f, "Invalid atlas: {}", msg),
            Error::MissingTexture(i) => write!(f, "Missing texture: index {}", i),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e)
    }
}
