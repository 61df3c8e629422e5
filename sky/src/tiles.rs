//! Frame planning for the tiled sky.
//!
//! The sky is one tile of stars repeated in both axes. [`plan_frame`] works
//! out which tiles the view can see and emits the draw commands for them in
//! paint order. It touches no browser API, so a frame can be inspected in
//! tests; [`crate::render`] replays the commands on a canvas.

#[cfg(test)]
#[path = "tiles_test.rs"]
mod tiles_test;

use crate::camera::{Point, ViewTransform};
use crate::links::Link;
use crate::star::{Star, StarId, TileGeometry};

/// One step of a frame, in paint order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Reset to the identity transform and fill the whole canvas.
    Background { width: f64, height: f64 },
    /// Apply the pan/zoom transform. `translate` is in canvas pixels.
    View { translate: Point, scale: f64 },
    /// Start a tile: translate by `origin` until [`DrawCommand::EndTile`].
    BeginTile { origin: Point },
    /// A constellation line in tile-local coordinates.
    Line { from: Point, to: Point },
    /// A filled star in tile-local coordinates.
    Star { center: Point, radius: f64, alpha: f64, selected: bool },
    EndTile,
}

/// Everything a frame depends on. Borrowed from the engine for one call.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub view: &'a ViewTransform,
    pub stars: &'a [Star],
    pub links: &'a [Link],
    pub tile: TileGeometry,
    /// Canvas size in device pixels.
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub show_lines: bool,
    pub selected: Option<StarId>,
}

/// Build the draw commands for one frame.
///
/// A canvas without area produces nothing. A degenerate tile produces only
/// the background.
#[must_use]
pub fn plan_frame(scene: &Scene<'_>) -> Vec<DrawCommand> {
    if scene.canvas_width <= 0.0 || scene.canvas_height <= 0.0 {
        return Vec::new();
    }

    let mut commands = vec![DrawCommand::Background { width: scene.canvas_width, height: scene.canvas_height }];
    if !scene.tile.is_valid() {
        return commands;
    }

    commands.push(DrawCommand::View { translate: scene.view.pixel_offset(), scale: scene.view.scale });

    let range = scene.view.visible_tile_range(
        scene.canvas_width,
        scene.canvas_height,
        scene.tile.width,
        scene.tile.height,
    );
    let per_tile = scene.stars.len() + if scene.show_lines { scene.links.len() } else { 0 } + 2;
    commands.reserve(range.len() * per_tile);

    for (tx, ty) in range.iter() {
        commands.push(DrawCommand::BeginTile { origin: tile_origin(tx, ty, scene.tile) });
        if scene.show_lines {
            // Lines first so stars sit on top.
            commands.extend(scene.links.iter().filter_map(|link| {
                let (a, b) = link.endpoints(scene.stars)?;
                Some(DrawCommand::Line { from: a.position(), to: b.position() })
            }));
        }
        commands.extend(scene.stars.iter().map(|star| DrawCommand::Star {
            center: star.position(),
            radius: star.radius,
            alpha: star.alpha,
            selected: scene.selected == Some(star.id),
        }));
        commands.push(DrawCommand::EndTile);
    }

    commands
}

/// Sky-space origin of tile `(tx, ty)`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn tile_origin(tx: i64, ty: i64, tile: TileGeometry) -> Point {
    Point::new(tx as f64 * tile.width, ty as f64 * tile.height)
}
