//! Star generation: one repeatable tile of sky per seed.

#[cfg(test)]
#[path = "star_test.rs"]
mod star_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::rng::SeededRandom;

/// Index of a star within its generation. Stable until the next regeneration.
pub type StarId = usize;

/// A single star in tile-local sky space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub id: StarId,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub alpha: f64,
}

impl Star {
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Tile dimensions captured when a star set was generated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TileGeometry {
    pub width: f64,
    pub height: f64,
}

impl TileGeometry {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether the tile has positive area.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Generate `count` stars for `seed` inside a `tile`.
///
/// Each star draws x, y, radius, alpha from the generator in that order.
/// Changing the order changes every layout.
#[must_use]
pub fn generate(seed: &str, count: usize, tile: TileGeometry) -> Vec<Star> {
    let mut rng = SeededRandom::new(seed);
    (0..count)
        .map(|id| {
            let x = rng.next() * tile.width;
            let y = rng.next() * tile.height;
            let radius = 0.5 + rng.next() * 2.0;
            let alpha = 0.5 + rng.next() * 0.5;
            Star { id, x, y, radius, alpha }
        })
        .collect()
}
