//! Copying source textures into a packed UV atlas
//!
//! Every chart triangle is rasterized in atlas texel space with barycentric
//! weights as its attribute.  The weights blend the per-vertex source
//! texture coordinates, and the source texture is sampled there.

use crate::buffer::RenderingBuffer;
use crate::cache::TextureCache;
use crate::color::{Rgb8, Rgba8};
use crate::error::{Error, Result};
use crate::math::{cover_u8, multiply_u8, Vector2, Vector3};
use crate::texture::TextureData;
use crate::triangle::rasterize;
use crate::Sampler;

use log::{debug, info};

/// Triangle of a packed chart
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct ChartTriangle {
    /// Positions in atlas texels
    pub atlas: [Vector2; 3],
    /// Texture coordinates in the source texture, [0,1] across it
    pub source_uv: [Vector2; 3],
}

/// Chart triangles sharing one source texture
#[derive(Debug,Default,Clone,PartialEq)]
pub struct AtlasMesh {
    /// Index of the source texture, None if the mesh has no texture
    pub texture: Option<usize>,
    pub triangles: Vec<ChartTriangle>,
}

/// Packed atlas, as produced by a chart packer
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Atlas {
    pub width: u32,
    pub height: u32,
    pub meshes: Vec<AtlasMesh>,
}

/// How texels are written into the atlas
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum FillMode {
    /// Last triangle touching a texel sets it
    Replace,
    /// Blend onto the texel by the fraction covered times the source alpha
    Coverage,
}
impl Default for FillMode {
    fn default() -> FillMode {
        FillMode::Replace
    }
}

/// Options for [repack](fn.repack.html)
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct RepackOptions {
    /// Flip source v, v -> 1 - v
    pub flip_v: bool,
    pub fill: FillMode,
    /// Color of texels not covered by any chart
    pub background: Rgb8,
}
impl Default for RepackOptions {
    fn default() -> Self {
        Self { flip_v: true, fill: FillMode::Replace, background: Rgb8::black() }
    }
}
impl RepackOptions {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn flip_v(mut self, flip_v: bool) -> Self {
        self.flip_v = flip_v;
        self
    }
    pub fn fill(mut self, fill: FillMode) -> Self {
        self.fill = fill;
        self
    }
    pub fn background(mut self, background: Rgb8) -> Self {
        self.background = background;
        self
    }
}

/// Counts from a repack
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct RepackStats {
    /// Triangles rasterized
    pub triangles: usize,
    /// Triangles skipped for having no area
    pub degenerate: usize,
    /// Sampler calls, including texels outside of the atlas
    pub texels: usize,
}

/// Atlas texture and counts
#[derive(Debug,Clone)]
pub struct RepackOutput {
    /// RGB atlas texture
    pub buffer: RenderingBuffer,
    pub stats: RepackStats,
}

/// Sampler writing source texture colors into an atlas
///
/// Writes magenta where no source texture is bound
#[derive(Debug)]
pub struct AtlasTexelWriter<'a> {
    buffer: &'a mut RenderingBuffer,
    source_uv: [Vector2; 3],
    texture: Option<&'a TextureData>,
    fill: FillMode,
    texels: usize,
}

impl<'a> AtlasTexelWriter<'a> {
    pub fn new(buffer: &'a mut RenderingBuffer, texture: Option<&'a TextureData>, fill: FillMode) -> Self {
        Self { buffer, texture, fill, source_uv: [Vector2::default(); 3], texels: 0 }
    }
    /// Set the source texture coordinates of the next triangle
    pub fn source_uv(&mut self, uv: [Vector2; 3]) {
        self.source_uv = uv;
    }
    /// Number of texels sampled so far
    pub fn texels(&self) -> usize {
        self.texels
    }
    /// Source color for barycentric weights `bar`
    pub fn color(&self, bar: Vector3) -> Rgba8 {
        match self.texture {
            None => Rgba8::from(Rgb8::magenta()),
            Some(tex) => {
                let s = &self.source_uv;
                let uv = s[0] * bar.x + s[1] * bar.y + s[2] * bar.z;
                tex.sample_uv_rgba(uv)
            }
        }
    }
}

impl Sampler for AtlasTexelWriter<'_> {
    fn sample(&mut self, x: i64, y: i64, bar: Vector3, _dx: Vector3, _dy: Vector3, coverage: f64) -> bool {
        let c = self.color(bar);
        match self.fill {
            FillMode::Replace => self.buffer.set_pixel(x, y, Rgb8::from(c)),
            FillMode::Coverage => {
                if x >= 0 && y >= 0 {
                    if let Some(bg) = self.buffer.pixel(x as usize, y as usize) {
                        let cover = multiply_u8(cover_u8(coverage), c.a);
                        self.buffer.set_pixel(x, y, bg.blend(Rgb8::from(c), cover));
                    }
                }
            }
        }
        self.texels += 1;
        true
    }
}

/// Rasterize every chart triangle of `atlas`, copying source texels
///
/// `textures` is indexed by [AtlasMesh::texture](struct.AtlasMesh.html);
/// None entries (textures that failed to load) are written as magenta.
/// Triangles without area are skipped and counted.
pub fn repack(atlas: &Atlas, textures: &[Option<&TextureData>], options: &RepackOptions) -> Result<RepackOutput> {
    if atlas.width == 0 || atlas.height == 0 {
        return Err(Error::InvalidAtlas(format!("atlas size {}x{}", atlas.width, atlas.height)));
    }
    let mut buffer = RenderingBuffer::new(atlas.width as usize, atlas.height as usize, 3);
    buffer.fill(options.background);

    let basis = [Vector3::new(1.0, 0.0, 0.0),
                 Vector3::new(0.0, 1.0, 0.0),
                 Vector3::new(0.0, 0.0, 1.0)];
    let mut stats = RepackStats::default();
    for (i, mesh) in atlas.meshes.iter().enumerate() {
        let texture = match mesh.texture {
            None => None,
            Some(t) => *textures.get(t).ok_or(Error::MissingTexture(t))?,
        };
        debug!("mesh {}: {} triangles, texture {:?}", i, mesh.triangles.len(), mesh.texture);
        let mut writer = AtlasTexelWriter::new(&mut buffer, texture, options.fill);
        for (k, tri) in mesh.triangles.iter().enumerate() {
            let mut uv = tri.source_uv;
            if options.flip_v {
                for p in uv.iter_mut() {
                    p.y = 1.0 - p.y;
                }
            }
            writer.source_uv(uv);
            match rasterize(tri.atlas, basis, &mut writer) {
                Ok(_) => stats.triangles += 1,
                Err(Error::DegenerateTriangle) => {
                    debug!("mesh {} triangle {}: degenerate, skipped {:?}", i, k, tri.atlas);
                    stats.degenerate += 1;
                },
                Err(e) => return Err(e),
            }
        }
        stats.texels += writer.texels();
    }
    info!("Rasterized {} triangles into {}x{} atlas ({} degenerate, {} texels)",
          stats.triangles, atlas.width, atlas.height, stats.degenerate, stats.texels);
    Ok(RepackOutput { buffer, stats })
}

/// [repack](fn.repack.html) with textures from a cache
pub fn repack_with_cache(atlas: &Atlas, cache: &TextureCache, options: &RepackOptions) -> Result<RepackOutput> {
    repack(atlas, &cache.textures(), options)
}
