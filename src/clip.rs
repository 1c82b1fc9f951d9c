//! Clipping of triangles against pixel boxes
//!
//! A triangle partially covering a pixel is clipped against the pixel
//! square using [Sutherland-Hodgman](https://en.wikipedia.org/wiki/Sutherland%E2%80%93Hodgman_algorithm),
//! one axis aligned half-plane at a time.  The area and centroid of the
//! remaining polygon give the coverage and the interpolation point.

use crate::math::Vector2;

/// Rectangle
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rectangle<T: std::cmp::PartialOrd + Copy> {
    /// Minimum x value
    pub x1: T,
    /// Minimum y value
    pub y1: T,
    /// Maximum x value
    pub x2: T,
    /// Maximum y value
    pub y2: T,
}
impl<T> Rectangle<T> where T: std::cmp::PartialOrd + Copy {
    /// Create a new Rectangle
    ///
    /// Values are sorted before storing
    ///
    ///     use texraster::Rectangle;
    ///
    ///     let r = Rectangle::new(4, 3, 1, 7);
    ///     assert_eq!((r.x1, r.y1, r.x2, r.y2), (1, 3, 4, 7));
    ///
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        let (x1, x2) = if x1 > x2 { (x2,x1) } else { (x1,x2) };
        let (y1, y2) = if y1 > y2 { (y2,y1) } else { (y1,y2) };
        Self { x1,y1,x2,y2 }
    }
    /// Expand if the point (x,y) is outside
    pub fn expand(&mut self, x: T, y: T) {
        if x < self.x1 { self.x1 = x; }
        if x > self.x2 { self.x2 = x; }
        if y < self.y1 { self.y1 = y; }
        if y > self.y2 { self.y2 = y; }
    }
    /// Expand if the rectangle is outside
    pub fn expand_rect(&mut self, r: &Rectangle<T>) {
        self.expand(r.x1, r.y1);
        self.expand(r.x2, r.y2);
    }
    /// Check if the point (x,y) is inside or on the boundary
    pub fn contains(&self, x: T, y: T) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}
impl<T> Rectangle<T> where T: std::cmp::PartialOrd + Copy + std::ops::Sub<Output=T> {
    pub fn width(&self) -> T {
        self.x2 - self.x1
    }
    pub fn height(&self) -> T {
        self.y2 - self.y1
    }
}

/// Maximum vertex count of a clipped ring plus its closing vertex
///
/// A triangle clipped by four half-planes has at most 7 vertices
const MAX_VERTICES: usize = 7 + 1;

#[derive(Debug,Copy,Clone,PartialEq)]
enum Axis {
    /// Plane x = offset
    Vertical,
    /// Plane y = offset
    Horizontal,
}

impl Axis {
    fn coord(self, v: Vector2) -> f64 {
        match self {
            Axis::Vertical   => v.x,
            Axis::Horizontal => v.y,
        }
    }
    /// Point on the plane along the edge a -> b
    ///
    /// `d` is the distance from `a` to the plane along this axis
    fn intersect(self, a: Vector2, b: Vector2, d: f64, offset: f64) -> Vector2 {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        match self {
            Axis::Vertical   => Vector2::new(offset, a.y + d * (dy / dx)),
            Axis::Horizontal => Vector2::new(a.x + d * (dx / dy), offset),
        }
    }
}

/// Triangle being clipped against an axis aligned box
///
/// Vertices live in two fixed size buffers; each clipping pass reads the
/// active buffer and writes the other one.
///
///     use texraster::{ClippedTriangle, Vector2};
///
///     // Right triangle missing one corner of the unit pixel
///     let mut ct = ClippedTriangle::new(Vector2::new(-0.5, -0.5),
///                                       Vector2::new( 1.0, -0.5),
///                                       Vector2::new(-0.5,  1.0));
///     ct.clip_aabox(-0.5, -0.5, 0.5, 0.5);
///     assert!((ct.area() - 0.875).abs() < 1e-12);
///
#[derive(Debug,Clone)]
pub struct ClippedTriangle {
    buffers: [[Vector2; MAX_VERTICES]; 2],
    active: usize,
    num_vertices: usize,
    area: f64,
    centroid: Vector2,
}

impl ClippedTriangle {
    /// Create a new triangle from three vertices
    pub fn new(a: Vector2, b: Vector2, c: Vector2) -> Self {
        let mut buffers = [[Vector2::default(); MAX_VERTICES]; 2];
        buffers[0][0] = a;
        buffers[0][1] = b;
        buffers[0][2] = c;
        Self { buffers, active: 0, num_vertices: 3,
               area: 0.0, centroid: Vector2::default() }
    }
    /// Current vertices of the clipped polygon, without the closing vertex
    pub fn vertices(&self) -> &[Vector2] {
        &self.buffers[self.active][.. self.num_vertices]
    }
    /// Area of the clipped polygon
    ///
    /// Valid after [clip_aabox](#method.clip_aabox) or
    /// [compute_area_centroid](#method.compute_area_centroid)
    pub fn area(&self) -> f64 {
        self.area
    }
    /// Centroid of the clipped polygon, the origin when the area is zero
    pub fn centroid(&self) -> Vector2 {
        self.centroid
    }
    /// Clip against the plane y = `offset`
    ///
    /// Points with `clip_direction * (offset - y) >= 0` are kept
    pub fn clip_horizontal_plane(&mut self, offset: f64, clip_direction: f64) {
        self.clip_plane(Axis::Horizontal, offset, clip_direction);
    }
    /// Clip against the plane x = `offset`
    ///
    /// Points with `clip_direction * (offset - x) >= 0` are kept
    pub fn clip_vertical_plane(&mut self, offset: f64, clip_direction: f64) {
        self.clip_plane(Axis::Vertical, offset, clip_direction);
    }
    fn clip_plane(&mut self, axis: Axis, offset: f64, clip_direction: f64) {
        let n = self.num_vertices;
        let (first, second) = self.buffers.split_at_mut(1);
        let (v, v2) = if self.active == 0 {
            (&mut first[0], &mut second[0])
        } else {
            (&mut second[0], &mut first[0])
        };
        self.active ^= 1;
        if n == 0 {
            return;
        }
        v[n] = v[0];
        let mut d1 = offset - axis.coord(v[0]);
        let mut d1_in = clip_direction * d1 >= 0.0;
        let mut p = 0;
        for k in 0 .. n {
            let d2 = offset - axis.coord(v[k+1]);
            let d2_in = clip_direction * d2 >= 0.0;
            if d1_in {
                debug_assert!(p < MAX_VERTICES - 1, "clipped polygon exceeds capacity");
                v2[p] = v[k];
                p += 1;
            }
            if d1_in != d2_in {
                debug_assert!(p < MAX_VERTICES - 1, "clipped polygon exceeds capacity");
                v2[p] = axis.intersect(v[k], v[k+1], d1, offset);
                p += 1;
            }
            d1 = d2;
            d1_in = d2_in;
        }
        self.num_vertices = p;
    }
    /// Compute the area and centroid of the current polygon
    ///
    /// See <http://paulbourke.net/geometry/polygonmesh/>
    pub fn compute_area_centroid(&mut self) {
        let n = self.num_vertices;
        self.area = 0.0;
        self.centroid = Vector2::default();
        if n < 3 {
            return;
        }
        let v = &mut self.buffers[self.active];
        v[n] = v[0];
        let mut area = 0.0;
        let (mut cx, mut cy) = (0.0, 0.0);
        for k in 0 .. n {
            let f = v[k].x * v[k+1].y - v[k+1].x * v[k].y;
            area += f;
            cx += f * (v[k].x + v[k+1].x);
            cy += f * (v[k].y + v[k+1].y);
        }
        // Signed sums carry the winding; the centroid divides it back out
        let signed = 0.5 * area;
        self.area = signed.abs();
        if self.area > 0.0 {
            self.centroid = Vector2::new(cx / (6.0 * signed), cy / (6.0 * signed));
        }
    }
    /// Clip against the box (x0,y0) - (x1,y1), then compute area and centroid
    ///
    /// Planes are applied left, bottom, right, top
    pub fn clip_aabox(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        self.clip_vertical_plane(x0, -1.0);
        self.clip_horizontal_plane(y0, -1.0);
        self.clip_vertical_plane(x1, 1.0);
        self.clip_horizontal_plane(y1, 1.0);
        self.compute_area_centroid();
    }
    /// Clip against a Rectangle, see [clip_aabox](#method.clip_aabox)
    pub fn clip_rect(&mut self, r: &Rectangle<f64>) {
        self.clip_aabox(r.x1, r.y1, r.x2, r.y2);
    }
}
