//! Algebraic properties checked over seeded random samples.

use geom3d::{GeomError, Line3D, Plane3D, Point3D, Vector3D};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 500;

fn random_vector(rng: &mut StdRng) -> Vector3D {
    Vector3D::new(
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
    )
}

fn random_point(rng: &mut StdRng) -> Point3D {
    random_vector(rng).as_point3d()
}

#[test]
fn test_normalized_has_unit_length() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        let n = v.normalized().unwrap();
        assert!((n.length() - 1.0).abs() < 1e-12, "{} -> {}", v, n);

        let mut m = v;
        m.normalize().unwrap();
        assert!(m.equals(&n));
    }
}

#[test]
fn test_null_vector_never_normalizes() {
    let mut v = Vector3D::new(0.0, -0.0, 0.0);
    assert!(matches!(v.normalized(), Err(GeomError::NullVector)));
    assert!(matches!(v.normalize(), Err(GeomError::NullVector)));
}

#[test]
fn test_point_vector_round_trip() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..SAMPLES {
        let a = random_point(&mut rng);
        let b = random_point(&mut rng);
        let back = b + (a - b);
        assert!(back.distance(&a) < 1e-10, "{} vs {}", back, a);
    }
}

#[test]
fn test_cross_product_properties() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        let w = random_vector(&mut rng);

        assert!(Vector3D::cross(&v, &v).is_null());

        let c = Vector3D::cross(&v, &w);
        let scale = v.length() * v.length() * w.length();
        assert!(Vector3D::dot(&v, &c).abs() <= 1e-12 * scale);
        assert!(Vector3D::dot(&w, &c).abs() <= 1e-12 * scale);
    }
}

#[test]
fn test_projection_matches_line_plane_intersection() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..SAMPLES {
        let line = Line3D::new(random_point(&mut rng), random_vector(&mut rng)).unwrap();
        let p = random_point(&mut rng);

        let plane = Plane3D::new(p, line.direction()).unwrap();
        let via_plane = line.intersect_with_plane(&plane, false).unwrap();
        let projected = p.project_on_line(&line, false).unwrap();
        assert!(via_plane.distance(&projected) < 1e-9);

        // The foot is perpendicular to the line.
        let offset = p - projected;
        assert!(Vector3D::dot(&offset, &line.direction()).abs() < 1e-8);
    }
}

#[test]
fn test_projection_on_plane_lands_in_plane() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..SAMPLES {
        let plane = Plane3D::new(random_point(&mut rng), random_vector(&mut rng)).unwrap();
        let p = random_point(&mut rng);

        let foot = p.project_on_plane(&plane).unwrap();
        assert!(foot.distance_to_plane(&plane).abs() < 1e-9);
        assert!((p.distance(&foot) - p.distance_to_plane(&plane).abs()).abs() < 1e-9);
    }
}

#[test]
fn test_approach_segment_is_common_perpendicular() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..SAMPLES {
        let l1 = Line3D::new(random_point(&mut rng), random_vector(&mut rng)).unwrap();
        let l2 = Line3D::new(random_point(&mut rng), random_vector(&mut rng)).unwrap();

        let (s1, s2) = Line3D::approach_lines(&l1, &l2, true).unwrap();
        let segment = s2 - s1;
        // Nearly parallel pairs push the feet far out along the lines.
        let tol = 1e-9 * (1.0 + s1.distance(&l1.base()) + s2.distance(&l2.base()));
        assert!(Vector3D::dot(&segment, &l1.direction()).abs() < tol);
        assert!(Vector3D::dot(&segment, &l2.direction()).abs() < tol);
    }
}

#[test]
fn test_intersection_line_lies_in_both_planes() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let p1 = Plane3D::new(random_point(&mut rng), random_vector(&mut rng)).unwrap();
        let p2 = Plane3D::new(random_point(&mut rng), random_vector(&mut rng)).unwrap();

        let line = Plane3D::intersect_planes(&p1, &p2).unwrap();
        let far = line.point_at(50.0);
        let tol = 1e-8 * (1.0 + line.base().as_vector3d().length());
        assert!(line.base().distance_to_plane(&p1).abs() < tol);
        assert!(line.base().distance_to_plane(&p2).abs() < tol);
        assert!(far.distance_to_plane(&p1).abs() < tol);
        assert!(far.distance_to_plane(&p2).abs() < tol);
    }
}

#[test]
fn test_angle_between_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        let w = random_vector(&mut rng);
        let angle = Vector3D::angle_between(&v, &w).unwrap();
        assert!((0.0..=180.0).contains(&angle));
        assert!((angle - Vector3D::angle_between(&w, &v).unwrap()).abs() < 1e-9);
    }
    let v = Vector3D::new(1.0, 2.0, 3.0);
    assert!(Vector3D::angle_between(&v, &v).unwrap() < 1e-5);
}
