extern crate texraster;

use texraster::{rasterize, Error, Triangle, Vector2, Vector3};

use std::collections::HashMap;

#[derive(Debug,Copy,Clone)]
struct Hit {
    t: Vector3,
    dx: Vector3,
    dy: Vector3,
    coverage: f64,
}

fn basis() -> [Vector3; 3] {
    [Vector3::new(1.,0.,0.), Vector3::new(0.,1.,0.), Vector3::new(0.,0.,1.)]
}

fn v(x: f64, y: f64) -> Vector2 {
    Vector2::new(x, y)
}

/// Rasterize, checking that no pixel is visited twice
fn hits(p: [Vector2; 3]) -> HashMap<(i64,i64), Hit> {
    let mut out = HashMap::new();
    let mut twice = vec![];
    let done = rasterize(p, basis(), &mut |x: i64, y: i64, t: Vector3, dx: Vector3, dy: Vector3, coverage: f64| {
        if out.insert((x,y), Hit { t, dx, dy, coverage }).is_some() {
            twice.push((x,y));
        }
        true
    }).unwrap();
    assert!(done);
    assert!(twice.is_empty(), "pixels visited more than once: {:?}", twice);
    out
}

fn area(p: [Vector2; 3]) -> f64 {
    0.5 * (p[1] - p[0]).cross(p[2] - p[0]).abs()
}

fn close(a: Vector3, b: Vector3, eps: f64) -> bool {
    (a.x - b.x).abs() < eps && (a.y - b.y).abs() < eps && (a.z - b.z).abs() < eps
}

#[test]
fn right_triangle_scenario() {
    let p = [v(0.5,0.5), v(10.5,0.5), v(0.5,10.5)];
    let h = hits(p);

    // Interior pixel, sampled at its center (3.5, 3.5)
    let c = h[&(3,3)];
    assert_eq!(c.coverage, 1.0);
    assert!(close(c.t, Vector3::new(0.4, 0.3, 0.3), 1e-9), "{:?}", c.t);
    for w in &[c.t.x, c.t.y, c.t.z] {
        assert!(*w >= 0.0 && *w <= 1.0);
    }
    assert!((c.t.sum() - 1.0).abs() < 1e-9);

    // Right angle corner covers the upper right quarter of pixel (0,0)
    assert!((h[&(0,0)].coverage - 0.25).abs() < 1e-9);

    // Pixels along the bottom edge are half covered; the attribute is
    // taken at the centroid of the covered half, (5.5, 0.75)
    let e = h[&(5,0)];
    assert!((e.coverage - 0.5).abs() < 1e-9);
    assert!(close(e.t, Vector3::new(0.475, 0.5, 0.025), 1e-9), "{:?}", e.t);

    // Gradients are constant across the triangle
    for hit in h.values() {
        assert!(close(hit.dx, Vector3::new(-0.1, 0.1, 0.0), 1e-12));
        assert!(close(hit.dy, Vector3::new(-0.1, 0.0, 0.1), 1e-12));
    }

    // Nothing beyond the hypotenuse or the bounding box
    assert!(!h.contains_key(&(9,9)));
    assert!(!h.contains_key(&(12,0)));
    assert!(!h.contains_key(&(0,12)));
    for (&(x,y), hit) in &h {
        assert!(hit.coverage > 0.0 && hit.coverage <= 1.0);
        assert!(x >= 0 && y >= 0 && x + y <= 11, "({},{})", x, y);
    }

    let total: f64 = h.values().map(|hit| hit.coverage).sum();
    assert!((total - 50.0).abs() < 1e-9, "{}", total);
}

#[test]
fn coverage_sums_to_area() {
    let tris = [
        [v(0.5,0.5), v(10.5,0.5), v(0.5,10.5)],
        [v(2.3,1.7), v(30.1,5.2), v(12.9,20.4)],
        [v(1.0,1.0), v(60.0,3.0), v(20.0,50.0)],
        [v(17.25,3.5), v(3.75,40.125), v(33.0,33.0)],
        // Thin sliver
        [v(1.1,1.2), v(40.7,2.9), v(40.9,3.6)],
        // Smaller than a pixel
        [v(3.2,3.3), v(3.7,3.4), v(3.4,3.9)],
        // Straddling pixel boundaries
        [v(4.9,4.9), v(6.1,5.05), v(5.2,6.3)],
    ];
    for p in tris.iter() {
        for &q in &[*p, [p[0], p[2], p[1]]] {
            let h = hits(q);
            let total: f64 = h.values().map(|hit| hit.coverage).sum();
            let a = area(q);
            assert!((total - a).abs() < 1e-9 * a.max(1.0), "{:?}: {} != {}", q, total, a);
        }
    }
}

#[test]
fn subpixel_triangle_uses_centroid() {
    let p = [v(3.2,3.3), v(3.7,3.4), v(3.4,3.9)];
    let h = hits(p);
    assert_eq!(h.len(), 1);
    let hit = h[&(3,3)];
    assert!((hit.coverage - area(p)).abs() < 1e-12);
    let third = 1.0 / 3.0;
    assert!(close(hit.t, Vector3::new(third, third, third), 1e-9), "{:?}", hit.t);
}

#[test]
fn contained_pixels_are_fully_covered() {
    let p = [v(1.0,1.0), v(60.0,3.0), v(20.0,50.0)];
    let tri = Triangle::new(p[0], p[1], p[2], basis()[0], basis()[1], basis()[2]).unwrap();
    let h = hits(p);
    let mut full = 0;
    for (&(x,y), hit) in &h {
        let corners = [v(x as f64, y as f64), v(x as f64 + 1.0, y as f64),
                       v(x as f64, y as f64 + 1.0), v(x as f64 + 1.0, y as f64 + 1.0)];
        let contained = corners.iter()
            .all(|c| tri.edge_distances(*c).iter().all(|d| *d >= 0.0));
        if contained {
            assert!((hit.coverage - 1.0).abs() < 1e-12, "({},{}) {}", x, y, hit.coverage);
            full += 1;
        }
        // Interpolated weights stay close to the triangle
        assert!((hit.t.sum() - 1.0).abs() < 1e-9);
    }
    assert!(full > 0);
}

#[test]
fn large_triangle_accepts_whole_blocks() {
    let p = [v(0.0,0.0), v(200.0,0.0), v(0.0,200.0)];
    let h = hits(p);
    let full = h.values().filter(|hit| hit.coverage == 1.0).count();
    // 20000 pixels of area, about 200 on the diagonal are partial
    assert!(full > 19_000, "{}", full);
    let total: f64 = h.values().map(|hit| hit.coverage).sum();
    assert!((total - 20000.0).abs() < 1e-6);
    // Full pixels carry the attribute at the pixel center
    let hit = h[&(10,20)];
    assert!(close(hit.t, Vector3::new(1.0 - 0.0525 - 0.1025, 0.0525, 0.1025), 1e-9), "{:?}", hit.t);
}

#[test]
fn degenerate_triangle_is_rejected() {
    let mut calls = 0;
    let r = rasterize([v(1.0,1.0), v(5.0,5.0), v(9.0,9.0)], basis(),
                      &mut |_x: i64, _y: i64, _t: Vector3, _dx: Vector3, _dy: Vector3, _c: f64| {
                          calls += 1;
                          true
                      });
    assert!(matches!(r, Err(Error::DegenerateTriangle)));
    assert_eq!(calls, 0);

    let r = rasterize([v(2.0,3.0), v(2.0,3.0), v(9.0,1.0)], basis(),
                      &mut |_x: i64, _y: i64, _t: Vector3, _dx: Vector3, _dy: Vector3, _c: f64| true);
    assert!(r.is_err());
}

#[test]
fn sampler_stops_traversal() {
    let p = [v(0.5,0.5), v(10.5,0.5), v(0.5,10.5)];
    let mut calls = 0;
    let done = rasterize(p, basis(), &mut |_x: i64, _y: i64, _t: Vector3, _dx: Vector3, _dy: Vector3, _c: f64| {
        calls += 1;
        false
    }).unwrap();
    assert!(!done);
    assert_eq!(calls, 1);

    for &stop in &[2, 7, 30] {
        let mut calls = 0;
        let done = rasterize(p, basis(), &mut |_x: i64, _y: i64, _t: Vector3, _dx: Vector3, _dy: Vector3, _c: f64| {
            calls += 1;
            calls < stop
        }).unwrap();
        assert!(!done);
        assert_eq!(calls, stop);
    }
}

#[test]
fn negative_coordinates_are_not_visited() {
    let p = [v(-5.0,-5.0), v(6.0,-5.0), v(-5.0,6.0)];
    let h = hits(p);
    assert!(!h.is_empty());
    for &(x,y) in h.keys() {
        assert!(x >= 0 && y >= 0);
    }
}

#[test]
fn trait_object_sampler() {
    struct Total(f64);
    impl texraster::Sampler for Total {
        fn sample(&mut self, _x: i64, _y: i64, _t: Vector3, _dx: Vector3, _dy: Vector3, c: f64) -> bool {
            self.0 += c;
            true
        }
    }
    let mut c = Total(0.0);
    let tri = Triangle::new(v(1.0,1.0), v(3.0,1.0), v(1.0,3.0),
                            basis()[0], basis()[1], basis()[2]).unwrap();
    let s: &mut dyn texraster::Sampler = &mut c;
    assert!(tri.draw_aa(s));
    // (1,1) full, (2,1) and (1,2) half
    assert!((c.0 - 2.0).abs() < 1e-12);
}
