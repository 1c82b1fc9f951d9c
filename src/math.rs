//! Vectors and fixed point helpers

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Point or direction in raster space
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// Create a new Vector2
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    /// Dot product
    pub fn dot(&self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }
    /// Euclidean length
    pub fn length(&self) -> f64 {
        self.dot(*self).sqrt()
    }
    /// Vector rotated by +90 degrees, (-y, x)
    pub fn perp(&self) -> Self {
        Self::new(-self.y, self.x)
    }
    /// 2D cross product, z component of (self x other)
    pub fn cross(&self, other: Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    fn add(self, b: Vector2) -> Vector2 {
        Vector2::new(self.x + b.x, self.y + b.y)
    }
}
impl Sub for Vector2 {
    type Output = Vector2;
    fn sub(self, b: Vector2) -> Vector2 {
        Vector2::new(self.x - b.x, self.y - b.y)
    }
}
impl Mul<f64> for Vector2 {
    type Output = Vector2;
    fn mul(self, s: f64) -> Vector2 {
        Vector2::new(self.x * s, self.y * s)
    }
}
impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

/// Per-vertex attribute, e.g. barycentric weights
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Create a new Vector3
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
    /// Sum of the components
    pub fn sum(&self) -> f64 {
        self.x + self.y + self.z
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, b: Vector3) -> Vector3 {
        Vector3::new(self.x + b.x, self.y + b.y, self.z + b.z)
    }
}
impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, b: Vector3) -> Vector3 {
        Vector3::new(self.x - b.x, self.y - b.y, self.z - b.z)
    }
}
impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, s: f64) -> Vector3 {
        Vector3::new(self.x * s, self.y * s, self.z * s)
    }
}
impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}
impl AddAssign for Vector3 {
    fn add_assign(&mut self, b: Vector3) {
        self.x += b.x;
        self.y += b.y;
        self.z += b.z;
    }
}
impl SubAssign for Vector3 {
    fn sub_assign(&mut self, b: Vector3) {
        self.x -= b.x;
        self.y -= b.y;
        self.z -= b.z;
    }
}

/// Interpolate from `p` to `q` by `a`/255 using fixed point math
pub fn lerp_u8(p: u8, q: u8, a: u8) -> u8 {
    let base_shift = 8;
    let base_msb = 1 << (base_shift - 1);
    let v = if p > q { 1 } else { 0 };
    let (q,p,a) = (i32::from(q), i32::from(p), i32::from(a));
    let t0 : i32  = (q - p) * a + base_msb - v; // Signed multiplication
    let t1 : i32 = ((t0>>base_shift) + t0) >> base_shift;
    (p + t1) as u8
}

/// Multiply two u8 values using fixed point math, a * b / 255
pub fn multiply_u8(a: u8, b: u8) -> u8 {
    let base_shift = 8;
    let base_msb = 1 << (base_shift - 1);
    let (a,b) = (u32::from(a), u32::from(b));
    let t : u32  = a * b + base_msb;
    let tt : u32 = ((t >> base_shift) + t) >> base_shift;
    tt as u8
}

/// Convert a fractional coverage in [0,1] to an 8-bit cover value
pub fn cover_u8(coverage: f64) -> u8 {
    (coverage.max(0.0).min(1.0) * 255.0).round() as u8
}
