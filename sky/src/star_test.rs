#![allow(clippy::float_cmp)]

use super::*;

fn tile() -> TileGeometry {
    TileGeometry::new(1280.0, 720.0)
}

#[test]
fn generates_requested_count_with_sequential_ids() {
    let stars = generate("orion", 200, tile());
    assert_eq!(stars.len(), 200);
    for (i, star) in stars.iter().enumerate() {
        assert_eq!(star.id, i);
    }
}

#[test]
fn zero_count_is_empty() {
    assert!(generate("orion", 0, tile()).is_empty());
}

#[test]
fn orion_is_reproducible() {
    let a = generate("orion", 200, tile());
    let b = generate("orion", 200, tile());
    assert_eq!(a[0].x, b[0].x);
    assert_eq!(a[0].y, b[0].y);
    assert_eq!(a, b);
}

#[test]
fn every_seed_is_reproducible() {
    for seed in ["a", "lyra", "cygnus42", "zzzz", "0"] {
        assert_eq!(generate(seed, 200, tile()), generate(seed, 200, tile()), "{seed}");
    }
}

#[test]
fn different_seeds_give_different_fields() {
    assert_ne!(generate("orion", 50, tile()), generate("lyra", 50, tile()));
}

#[test]
fn draw_order_is_x_y_radius_alpha() {
    let stars = generate("orion", 2, tile());
    let mut rng = SeededRandom::new("orion");
    for star in &stars {
        assert_eq!(star.x, rng.next() * 1280.0);
        assert_eq!(star.y, rng.next() * 720.0);
        assert_eq!(star.radius, 0.5 + rng.next() * 2.0);
        assert_eq!(star.alpha, 0.5 + rng.next() * 0.5);
    }
}

#[test]
fn stars_fall_inside_tile_with_bounded_style() {
    for star in generate("pleiades", 500, tile()) {
        assert!((0.0..1280.0).contains(&star.x));
        assert!((0.0..720.0).contains(&star.y));
        assert!((0.5..2.5).contains(&star.radius));
        assert!((0.5..1.0).contains(&star.alpha));
    }
}

#[test]
fn prefix_is_stable_across_counts() {
    let short = generate("orion", 10, tile());
    let long = generate("orion", 200, tile());
    assert_eq!(short[..], long[..10]);
}

#[test]
fn tile_size_scales_positions_only() {
    let small = generate("orion", 20, TileGeometry::new(100.0, 100.0));
    let large = generate("orion", 20, TileGeometry::new(200.0, 300.0));
    for (s, l) in small.iter().zip(&large) {
        assert!((l.x - s.x * 2.0).abs() < 1e-9);
        assert!((l.y - s.y * 3.0).abs() < 1e-9);
        assert_eq!(s.radius, l.radius);
        assert_eq!(s.alpha, l.alpha);
    }
}

#[test]
fn tile_geometry_validity() {
    assert!(TileGeometry::new(1.0, 1.0).is_valid());
    assert!(!TileGeometry::new(0.0, 1.0).is_valid());
    assert!(!TileGeometry::default().is_valid());
}

#[test]
fn star_serializes_to_json() {
    let star = Star { id: 3, x: 1.5, y: 2.0, radius: 1.0, alpha: 0.75 };
    let json = serde_json::to_value(star).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["alpha"], 0.75);
}
