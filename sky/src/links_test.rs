#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use super::*;
use crate::star::{TileGeometry, generate};

fn star_at(id: usize, x: f64, y: f64) -> Star {
    Star { id, x, y, radius: 1.0, alpha: 1.0 }
}

fn stars_at(points: &[(f64, f64)]) -> Vec<Star> {
    points.iter().enumerate().map(|(i, &(x, y))| star_at(i, x, y)).collect()
}

fn params(max_distance: f64, max_neighbors: usize) -> LinkParams {
    LinkParams { max_distance, max_neighbors }
}

fn link_length(link: Link, stars: &[Star]) -> f64 {
    let (a, b) = link.endpoints(stars).unwrap();
    a.position().distance(b.position())
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn three_stars_one_link() {
    let stars = stars_at(&[(0.0, 0.0), (10.0, 0.0), (300.0, 300.0)]);
    let links = build_links(&stars, params(140.0, 2));
    assert_eq!(links, vec![Link { from: 0, to: 1 }]);
    assert_eq!(link_length(links[0], &stars), 10.0);
}

#[test]
fn zero_neighbors_yields_nothing() {
    let stars = stars_at(&[(0.0, 0.0), (1.0, 0.0)]);
    assert!(build_links(&stars, params(140.0, 0)).is_empty());
}

#[test]
fn zero_distance_yields_nothing() {
    let stars = stars_at(&[(0.0, 0.0), (0.0, 0.0)]);
    assert!(build_links(&stars, params(0.0, 3)).is_empty());
}

#[test]
fn empty_and_single_star_yield_nothing() {
    assert!(build_links(&[], params(140.0, 2)).is_empty());
    assert!(build_links(&stars_at(&[(5.0, 5.0)]), params(140.0, 2)).is_empty());
}

#[test]
fn distance_bound_is_inclusive() {
    let stars = stars_at(&[(0.0, 0.0), (3.0, 4.0)]);
    assert_eq!(build_links(&stars, params(5.0, 1)), vec![Link { from: 0, to: 1 }]);
    assert!(build_links(&stars, params(4.99, 1)).is_empty());
}

#[test]
fn neighbor_cap_keeps_closest() {
    // Star 0 sees 1, 2, 3 at 30, 10, 20; with cap 2 it keeps 2 and 3.
    let stars = stars_at(&[(0.0, 0.0), (30.0, 0.0), (0.0, 10.0), (0.0, -20.0)]);
    let links = build_links(&stars, params(100.0, 2));
    assert!(links.contains(&Link { from: 0, to: 2 }));
    assert!(links.contains(&Link { from: 0, to: 3 }));
    // Star 1's closest are 0 (30) and 2 (~31.6); 1 -> 2 survives as (1, 2).
    assert!(links.contains(&Link { from: 1, to: 2 }));
}

#[test]
fn equal_distances_prefer_lower_index() {
    // 1, 2, 3 all at distance 10 from star 0.
    let stars = stars_at(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (-10.0, 0.0)]);
    let links = build_links(&stars, params(10.0, 1));
    assert_eq!(links.first(), Some(&Link { from: 0, to: 1 }));
}

#[test]
fn choice_by_higher_id_only_is_dropped() {
    // Star 2 sits between 0 and 1, closer to 1. With cap 1:
    //   0 -> 2 kept, 1 -> 2 kept, 2 -> 1 dropped.
    let stars = stars_at(&[(0.0, 0.0), (100.0, 0.0), (60.0, 0.0)]);
    let links = build_links(&stars, params(200.0, 1));
    assert_eq!(links, vec![Link { from: 0, to: 2 }, Link { from: 1, to: 2 }]);
}

#[test]
fn non_mutual_choice_from_lower_id_is_kept() {
    // 0 picks 1; 1 picks 2 (closer). Link (0, 1) still exists.
    let stars = stars_at(&[(0.0, 0.0), (50.0, 0.0), (55.0, 0.0)]);
    let links = build_links(&stars, params(200.0, 1));
    assert!(links.contains(&Link { from: 0, to: 1 }));
    assert!(links.contains(&Link { from: 1, to: 2 }));
    assert_eq!(links.len(), 2);
}

#[test]
fn picks_of_higher_id_stars_toward_lower_ids_are_not_emitted() {
    // Star 2 is alone near star 0; star 0 prefers star 1, so 2 -> 0 is lost.
    let stars = stars_at(&[(0.0, 0.0), (1.0, 0.0), (0.0, 5.0)]);
    let links = build_links(&stars, params(100.0, 1));
    assert_eq!(links, vec![Link { from: 0, to: 1 }]);
}

// =============================================================
// Properties over generated fields
// =============================================================

#[test]
fn generated_links_are_canonical_unique_and_bounded() {
    let tile = TileGeometry::new(1280.0, 720.0);
    for seed in ["orion", "lyra", "draco", "x1"] {
        let stars = generate(seed, 200, tile);
        for &(max_distance, max_neighbors) in &[(140.0, 2), (60.0, 5), (400.0, 1)] {
            let links = build_links(&stars, params(max_distance, max_neighbors));
            let mut seen = HashSet::new();
            for link in &links {
                assert!(link.from < link.to, "{seed}: {link:?}");
                assert!(seen.insert(*link), "{seed}: duplicate {link:?}");
                assert!(link_length(*link, &stars) <= max_distance);
            }
        }
    }
}

#[test]
fn generated_links_are_deterministic() {
    let tile = TileGeometry::new(900.0, 600.0);
    let a = build_links(&generate("orion", 200, tile), params(140.0, 2));
    let b = build_links(&generate("orion", 200, tile), params(140.0, 2));
    assert_eq!(a, b);
}

#[test]
fn each_star_emits_at_most_max_neighbors_links_as_from() {
    let stars = generate("cygnus", 200, TileGeometry::new(800.0, 800.0));
    let links = build_links(&stars, params(200.0, 3));
    for star in &stars {
        let out = links.iter().filter(|l| l.from == star.id).count();
        assert!(out <= 3);
    }
}

#[test]
fn endpoints_out_of_range_is_none() {
    let stars = stars_at(&[(0.0, 0.0)]);
    assert!(Link { from: 0, to: 5 }.endpoints(&stars).is_none());
}
