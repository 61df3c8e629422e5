#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Point, ViewTransform, wrap_to_tile};
use crate::star::{Star, StarId, TileGeometry};

/// Find the star under a canvas-pixel click.
///
/// The click is mapped into sky space, folded into the tile, and compared
/// against stars in id order. The first star within `click_radius` wins,
/// even when a later star is closer.
#[must_use]
pub fn hit_test(
    pixel: Point,
    view: &ViewTransform,
    stars: &[Star],
    tile: TileGeometry,
    click_radius: f64,
) -> Option<StarId> {
    if !tile.is_valid() {
        return None;
    }
    let sky = wrap_to_tile(view.screen_to_sky(pixel), tile.width, tile.height);
    stars
        .iter()
        .find(|star| star.position().distance(sky) <= click_radius)
        .map(|star| star.id)
}
