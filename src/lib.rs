//! Analytic anti-aliased triangle rasterization
//!
//! How does this work
//!
//! ```text
//!   tri = Triangle::new(positions, attributes)
//!     compute_deltas()               -- attribute gradients dx, dy
//!     compute_unit_inward_normals()  -- edge half-planes
//!   tri.draw_aa(sampler)
//!     Blocks (8x8) classified at their center
//!       outside  -> skipped
//!       inside   -> sampler(x, y, t, dx, dy, 1.0) for every pixel
//!       partial  -> each pixel classified at its center
//!         inside  -> sampler(.., 1.0)
//!         partial -> ClippedTriangle::clip_aabox()
//!                      sampler(.., t at centroid, area)
//!   Sampler returns false to stop
//! ```
//!
//! Repacking textures into an atlas
//!
//! ```text
//!   repack(atlas, textures, options)
//!     AtlasTexelWriter (a Sampler)
//!       source uv = barycentric blend of per-vertex source uvs
//!       TextureData::sample_uv() -- wraps out of range texels
//!       RenderingBuffer::set_pixel()
//! ```

pub mod math;
pub mod error;
pub mod clip;
pub mod triangle;
pub mod color;
pub mod buffer;
pub mod texture;
pub mod cache;
pub mod atlas;
pub mod imgfile;

pub use math::*;
pub use error::*;
pub use clip::*;
pub use triangle::*;
pub use color::*;
pub use buffer::*;
pub use texture::*;
pub use cache::*;
pub use atlas::*;

/// Receiver of rasterized pixels
///
/// Called once per pixel touched by a triangle with the pixel location,
/// the interpolated attribute, the attribute gradients and the fraction
/// of the pixel covered, in (0,1].  Return false to stop rasterization.
///
/// Any `FnMut(i64, i64, Vector3, Vector3, Vector3, f64) -> bool` is a Sampler
pub trait Sampler {
    fn sample(&mut self, x: i64, y: i64, bar: Vector3, dx: Vector3, dy: Vector3, coverage: f64) -> bool;
}

impl<F> Sampler for F where F: FnMut(i64, i64, Vector3, Vector3, Vector3, f64) -> bool {
    fn sample(&mut self, x: i64, y: i64, bar: Vector3, dx: Vector3, dy: Vector3, coverage: f64) -> bool {
        self(x, y, bar, dx, dy, coverage)
    }
}
