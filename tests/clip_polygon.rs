extern crate texraster;

use texraster::{ClippedTriangle, Rectangle, Vector2};

fn v(x: f64, y: f64) -> Vector2 {
    Vector2::new(x, y)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn pixel_inside_triangle_is_whole_pixel() {
    let mut ct = ClippedTriangle::new(v(-5.0,-5.0), v(15.0,-5.0), v(-5.0,15.0));
    ct.clip_aabox(-0.5, -0.5, 0.5, 0.5);
    assert!(close(ct.area(), 1.0));
    assert!(close(ct.centroid().x, 0.0));
    assert!(close(ct.centroid().y, 0.0));
}

#[test]
fn containing_box_keeps_triangle() {
    let tri = [v(0.1,0.2), v(0.4,-0.3), v(-0.2,0.45)];
    for &(a, b, c) in &[(0,1,2), (0,2,1)] {
        let mut ct = ClippedTriangle::new(tri[a], tri[b], tri[c]);
        ct.clip_aabox(-0.5, -0.5, 0.5, 0.5);
        let area = 0.5 * (tri[1] - tri[0]).cross(tri[2] - tri[0]).abs();
        assert!(close(ct.area(), area));
        assert!(close(ct.centroid().x, (0.1 + 0.4 - 0.2) / 3.0));
        assert!(close(ct.centroid().y, (0.2 - 0.3 + 0.45) / 3.0));
    }
}

#[test]
fn half_pixel() {
    // Edge along y = 0, triangle above it
    let mut ct = ClippedTriangle::new(v(-10.0,0.0), v(10.0,0.0), v(0.0,10.0));
    ct.clip_aabox(-0.5, -0.5, 0.5, 0.5);
    assert!(close(ct.area(), 0.5));
    assert!(close(ct.centroid().x, 0.0));
    assert!(close(ct.centroid().y, 0.25));
}

#[test]
fn planes_one_at_a_time() {
    let mut a = ClippedTriangle::new(v(-1.0,-1.0), v(2.0,-0.2), v(0.3,1.7));
    a.clip_aabox(-0.5, -0.5, 0.5, 0.5);

    let mut b = ClippedTriangle::new(v(-1.0,-1.0), v(2.0,-0.2), v(0.3,1.7));
    b.clip_vertical_plane(-0.5, -1.0);
    b.clip_horizontal_plane(-0.5, -1.0);
    b.clip_vertical_plane(0.5, 1.0);
    b.clip_horizontal_plane(0.5, 1.0);
    b.compute_area_centroid();
    assert_eq!(a.vertices(), b.vertices());
    assert_eq!(a.area(), b.area());

    let mut c = ClippedTriangle::new(v(-1.0,-1.0), v(2.0,-0.2), v(0.3,1.7));
    c.clip_rect(&Rectangle::new(0.5, 0.5, -0.5, -0.5));
    assert_eq!(a.area(), c.area());
    for p in a.vertices() {
        assert!(p.x >= -0.5 && p.x <= 0.5 && p.y >= -0.5 && p.y <= 0.5, "{:?}", p);
    }
}

#[test]
fn single_plane_keeps_one_side() {
    let mut ct = ClippedTriangle::new(v(0.0,0.0), v(2.0,0.0), v(0.0,2.0));
    // Keep x <= 1
    ct.clip_vertical_plane(1.0, 1.0);
    ct.compute_area_centroid();
    assert!(close(ct.area(), 1.5));
    assert_eq!(ct.vertices().len(), 4);
}

#[test]
fn box_outside_triangle() {
    let mut ct = ClippedTriangle::new(v(0.0,0.0), v(1.0,0.0), v(0.0,1.0));
    ct.clip_aabox(0.6, 0.6, 1.0, 1.0);
    assert_eq!(ct.area(), 0.0);
    assert_eq!(ct.centroid(), Vector2::default());
}
