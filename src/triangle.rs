//! Anti-Aliased Triangle Rasterizer
//!
//! Triangles are traversed in 8x8 blocks of pixels.  Each block is tested
//! against the three edge half-planes at its center:
//!
//!  - outside an edge by more than its half-diagonal: skipped
//!  - inside all edges by more than its half-diagonal: every pixel is
//!    fully covered
//!  - otherwise each pixel is tested the same way with the pixel
//!    half-diagonal, and pixels on an edge are clipped exactly against the
//!    pixel square by [ClippedTriangle](../clip/struct.ClippedTriangle.html)
//!
//! Attributes are interpolated with gradients computed once from the affine
//! basis of the triangle and stepped across pixels.

use crate::clip::ClippedTriangle;
use crate::clip::Rectangle;
use crate::error::{Error, Result};
use crate::math::{Vector2, Vector3};
use crate::Sampler;

use log::trace;

/// Side length of a block of pixels
const BK_SIZE: f64 = 8.0;

/// Pixel half-diagonal, sqrt(2)/2
fn px_inside() -> f64 {
    1.0 / 2f64.sqrt()
}
/// Block half-diagonal, sqrt(BK_SIZE^2 / 2)
fn bk_inside() -> f64 {
    (BK_SIZE * BK_SIZE / 2.0).sqrt()
}

/// Triangle in raster space with interpolated attributes
///
/// Vertices and attributes are stored in the order (v0, v2, v1) relative
/// to the order given to [new](#method.new).
#[derive(Debug,Copy,Clone)]
pub struct Triangle {
    v1: Vector2,
    v2: Vector2,
    v3: Vector2,
    /// Unit inward normals
    n1: Vector2,
    n2: Vector2,
    n3: Vector2,
    /// Half-plane constants, n . p + c >= 0 inside
    c1: f64,
    c2: f64,
    c3: f64,
    t1: Vector3,
    t2: Vector3,
    t3: Vector3,
    dx: Vector3,
    dy: Vector3,
}

impl Triangle {
    /// Create a new Triangle from vertex positions `v*` and attributes `t*`
    ///
    /// Fails with [DegenerateTriangle](../error/enum.Error.html) if the
    /// vertices are collinear, coincident or not finite
    ///
    ///     use texraster::{Triangle, Vector2, Vector3, Error};
    ///
    ///     let t = [Vector3::new(1.,0.,0.), Vector3::new(0.,1.,0.), Vector3::new(0.,0.,1.)];
    ///     let flat = Triangle::new(Vector2::new(0.,0.), Vector2::new(1.,1.), Vector2::new(2.,2.),
    ///                              t[0], t[1], t[2]);
    ///     assert!(matches!(flat, Err(Error::DegenerateTriangle)));
    ///
    pub fn new(v0: Vector2, v1: Vector2, v2: Vector2,
               t0: Vector3, t1: Vector3, t2: Vector3) -> Result<Self> {
        let zero2 = Vector2::default();
        let zero3 = Vector3::default();
        let mut tri = Triangle {
            v1: v0, v2, v3: v1,
            t1: t0, t2, t3: t1,
            n1: zero2, n2: zero2, n3: zero2,
            c1: 0.0, c2: 0.0, c3: 0.0,
            dx: zero3, dy: zero3,
        };
        tri.compute_deltas()?;
        tri.compute_unit_inward_normals()?;
        Ok(tri)
    }

    /// Compute attribute gradients
    ///
    /// The two edge vectors from v1 form a basis; the coordinates of the
    /// canonical x and y directions in that basis give the rate of change
    /// of the attribute per unit x and per unit y.
    fn compute_deltas(&mut self) -> Result<()> {
        let e0 = self.v3 - self.v1;
        let e1 = self.v2 - self.v1;
        let de0 = self.t3 - self.t1;
        let de1 = self.t2 - self.t1;
        let denom = 1.0 / (e0.y * e1.x - e1.y * e0.x);
        if !denom.is_finite() {
            return Err(Error::DegenerateTriangle);
        }
        let lambda1 = - e1.y * denom;
        let lambda2 =   e0.y * denom;
        let lambda3 =   e1.x * denom;
        let lambda4 = - e0.x * denom;
        self.dx = de0 * lambda1 + de1 * lambda2;
        self.dy = de0 * lambda3 + de1 * lambda4;
        if !self.dx.is_finite() || !self.dy.is_finite() {
            return Err(Error::DegenerateTriangle);
        }
        Ok(())
    }

    /// Compute unit inward normals and the half-plane constant of each edge
    fn compute_unit_inward_normals(&mut self) -> Result<()> {
        let unit = |a: Vector2, b: Vector2| -> Result<Vector2> {
            let n = (a - b).perp();
            let len = n.length();
            if len == 0.0 || !len.is_finite() {
                return Err(Error::DegenerateTriangle);
            }
            Ok(n * (1.0 / len))
        };
        let mut n1 = unit(self.v1, self.v2)?;
        let mut n2 = unit(self.v2, self.v3)?;
        let mut n3 = unit(self.v3, self.v1)?;
        // (a - b).perp() points inward for clockwise (y-down) winding
        if (self.v2 - self.v1).cross(self.v3 - self.v1) > 0.0 {
            n1 = -n1;
            n2 = -n2;
            n3 = -n3;
        }
        self.n1 = n1;
        self.n2 = n2;
        self.n3 = n3;
        self.c1 = -n1.dot(self.v1);
        self.c2 = -n2.dot(self.v2);
        self.c3 = -n3.dot(self.v3);
        Ok(())
    }

    /// Vertices in internal order
    pub fn vertices(&self) -> [Vector2; 3] {
        [self.v1, self.v2, self.v3]
    }
    /// Attributes in internal order
    pub fn attributes(&self) -> [Vector3; 3] {
        [self.t1, self.t2, self.t3]
    }
    /// Unit inward edge normals, edges v1-v2, v2-v3, v3-v1
    pub fn normals(&self) -> [Vector2; 3] {
        [self.n1, self.n2, self.n3]
    }
    /// Attribute change per unit x
    pub fn dx(&self) -> Vector3 {
        self.dx
    }
    /// Attribute change per unit y
    pub fn dy(&self) -> Vector3 {
        self.dy
    }
    /// Unsigned area
    pub fn area(&self) -> f64 {
        0.5 * (self.v2 - self.v1).cross(self.v3 - self.v1).abs()
    }
    /// Bounding box of the vertices
    pub fn bounds(&self) -> Rectangle<f64> {
        let mut r = Rectangle::new(self.v1.x, self.v1.y, self.v1.x, self.v1.y);
        r.expand(self.v2.x, self.v2.y);
        r.expand(self.v3.x, self.v3.y);
        r
    }
    /// Signed distances of `p` to the three edges, positive inside
    pub fn edge_distances(&self, p: Vector2) -> [f64; 3] {
        [self.c1 + self.n1.dot(p),
         self.c2 + self.n2.dot(p),
         self.c3 + self.n3.dot(p)]
    }
    /// Interpolate the attribute at `p`
    pub fn attribute_at(&self, p: Vector2) -> Vector3 {
        self.t1 + self.dx * (p.x - self.v1.x) + self.dy * (p.y - self.v1.y)
    }

    /// Rasterize with anti-aliasing, calling `sampler` once per covered pixel
    ///
    /// Pixels fully inside receive a coverage of 1.0 and the attribute at
    /// the pixel center.  Pixels on an edge receive the exact fraction of
    /// the pixel covered and the attribute at the centroid of the covered
    /// region.  Pixels left of or above the origin are never visited.
    ///
    /// Returns false if `sampler` stopped the traversal
    ///
    ///     use texraster::{Triangle, Vector2, Vector3};
    ///
    ///     let t = Vector3::new(1.0, 1.0, 1.0);
    ///     let tri = Triangle::new(Vector2::new(1.0, 1.0), Vector2::new(5.0, 1.0),
    ///                             Vector2::new(1.0, 5.0), t, t, t).unwrap();
    ///     let mut total = 0.0;
    ///     let done = tri.draw_aa(&mut |_x: i64, _y: i64, _t: Vector3, _dx: Vector3,
    ///                                  _dy: Vector3, coverage: f64| {
    ///         total += coverage;
    ///         true
    ///     });
    ///     assert!(done);
    ///     assert!((total - 8.0).abs() < 1e-9);
    ///
    pub fn draw_aa<S: Sampler + ?Sized>(&self, sampler: &mut S) -> bool {
        let px_inside = px_inside();
        let px_outside = -px_inside;
        let bk_inside = bk_inside();
        let bk_outside = -bk_inside;

        let b = self.bounds();
        // Sample at texel centers
        let minx = b.x1.max(0.0).floor() + 0.5;
        let miny = b.y1.max(0.0).floor() + 0.5;
        let maxx = b.x2.ceil() + 0.5;
        let maxy = b.y2.ceil() + 0.5;
        trace!("draw_aa: x {} .. {} y {} .. {}", minx, maxx, miny, maxy);

        let (v1, dx, dy) = (self.v1, self.dx, self.dy);
        let (n1, n2, n3) = (self.n1, self.n2, self.n3);

        let mut y0 = miny;
        while y0 <= maxy {
            let mut x0 = minx;
            while x0 <= maxx {
                // Center of block
                let c = Vector2::new(x0 + (BK_SIZE - 1.0) / 2.0,
                                     y0 + (BK_SIZE - 1.0) / 2.0);
                let [a_c, b_c, c_c] = self.edge_distances(c);
                if a_c <= bk_outside || b_c <= bk_outside || c_c <= bk_outside {
                    // Block outside an edge
                } else if a_c >= bk_inside && b_c >= bk_inside && c_c >= bk_inside {
                    // Block fully covered
                    let mut tex_row = self.attribute_at(Vector2::new(x0, y0));
                    let mut y = y0;
                    while y < y0 + BK_SIZE {
                        let mut tex = tex_row;
                        let mut x = x0;
                        while x < x0 + BK_SIZE {
                            if !sampler.sample(x as i64, y as i64, tex, dx, dy, 1.0) {
                                return false;
                            }
                            tex += dx;
                            x += 1.0;
                        }
                        tex_row += dy;
                        y += 1.0;
                    }
                } else {
                    // Partially covered block
                    let [mut cy1, mut cy2, mut cy3] = self.edge_distances(Vector2::new(x0, y0));
                    let mut tex_row = self.attribute_at(Vector2::new(x0, y0));
                    let mut y = y0;
                    while y < y0 + BK_SIZE {
                        let (mut cx1, mut cx2, mut cx3) = (cy1, cy2, cy3);
                        let mut tex = tex_row;
                        let mut x = x0;
                        while x < x0 + BK_SIZE {
                            if cx1 >= px_inside && cx2 >= px_inside && cx3 >= px_inside {
                                // Pixel fully covered
                                let tex2 = self.t1 + dx * (x - v1.x) + dy * (y - v1.y);
                                if !sampler.sample(x as i64, y as i64, tex2, dx, dy, 1.0) {
                                    return false;
                                }
                            } else if cx1 >= px_outside && cx2 >= px_outside && cx3 >= px_outside {
                                // Pixel on an edge, clip against the pixel square
                                let p = Vector2::new(x, y);
                                let mut ct = ClippedTriangle::new(self.v1 - p, self.v2 - p, self.v3 - p);
                                ct.clip_aabox(-0.5, -0.5, 0.5, 0.5);
                                let area = ct.area();
                                if area > 0.0 {
                                    let cent = ct.centroid();
                                    let tex_cent = tex + dx * cent.x + dy * cent.y;
                                    if !sampler.sample(x as i64, y as i64, tex_cent, dx, dy, area.min(1.0)) {
                                        return false;
                                    }
                                }
                            }
                            cx1 += n1.x;
                            cx2 += n2.x;
                            cx3 += n3.x;
                            tex += dx;
                            x += 1.0;
                        }
                        cy1 += n1.y;
                        cy2 += n2.y;
                        cy3 += n3.y;
                        tex_row += dy;
                        y += 1.0;
                    }
                }
                x0 += BK_SIZE;
            }
            y0 += BK_SIZE;
        }
        true
    }
}

/// Rasterize a triangle given by `positions` and per-vertex `attributes`
///
/// Returns `Ok(false)` if the sampler stopped early and
/// [DegenerateTriangle](../error/enum.Error.html) without calling the
/// sampler if the triangle has no area
pub fn rasterize<S: Sampler + ?Sized>(positions: [Vector2; 3],
                                      attributes: [Vector3; 3],
                                      sampler: &mut S) -> Result<bool> {
    let tri = Triangle::new(positions[0], positions[1], positions[2],
                            attributes[0], attributes[1], attributes[2])?;
    Ok(tri.draw_aa(sampler))
}
