#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{MIN_SCALE, ZOOM_STEP};

/// A point in screen, canvas-pixel, or sky space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Direction of a single zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Inclusive range of tile indices covering the visible canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRange {
    pub start_x: i64,
    pub start_y: i64,
    pub end_x: i64,
    pub end_y: i64,
}

impl TileRange {
    /// A range that yields no tiles.
    pub const EMPTY: Self = Self { start_x: 0, start_y: 0, end_x: -1, end_y: -1 };

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end_x < self.start_x || self.end_y < self.start_y
    }

    /// Number of tiles in the range.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let w = usize::try_from(self.end_x - self.start_x + 1).unwrap_or(0);
        let h = usize::try_from(self.end_y - self.start_y + 1).unwrap_or(0);
        w * h
    }

    /// Tile index pairs, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + use<> {
        let (sx, ex) = (self.start_x, self.end_x);
        (self.start_y..=self.end_y).flat_map(move |ty| (sx..=ex).map(move |tx| (tx, ty)))
    }
}

/// Pan/zoom state for the infinite sky.
///
/// `offset_x` / `offset_y` are in un-scaled CSS pixels and are applied
/// before `scale` in the render transform. `dpr` is the device pixel ratio
/// used to turn those offsets into canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
    pub dpr: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self { offset_x: 0.0, offset_y: 0.0, scale: 1.0, dpr: 1.0 }
    }
}

impl ViewTransform {
    /// Shift the view by a drag delta in CSS pixels.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Scale by one zoom step. Zooming out never goes below [`MIN_SCALE`].
    pub fn zoom(&mut self, direction: ZoomDirection) {
        match direction {
            ZoomDirection::In => self.scale *= 1.0 + ZOOM_STEP,
            ZoomDirection::Out => {
                self.scale *= 1.0 - ZOOM_STEP;
                if self.scale < MIN_SCALE {
                    self.scale = MIN_SCALE;
                }
            }
        }
    }

    /// Translation of the render transform in canvas pixels.
    #[must_use]
    pub fn pixel_offset(&self) -> Point {
        Point::new(self.offset_x * self.dpr, self.offset_y * self.dpr)
    }

    /// Map a canvas-pixel point into (unwrapped) sky space.
    #[must_use]
    pub fn screen_to_sky(&self, pixel: Point) -> Point {
        let offset = self.pixel_offset();
        Point { x: (pixel.x - offset.x) / self.scale, y: (pixel.y - offset.y) / self.scale }
    }

    /// Map a sky-space point into canvas pixels.
    #[must_use]
    pub fn sky_to_screen(&self, sky: Point) -> Point {
        let offset = self.pixel_offset();
        Point { x: sky.x * self.scale + offset.x, y: sky.y * self.scale + offset.y }
    }

    /// Tiles intersecting the canvas, padded by one tile on every side.
    ///
    /// Returns [`TileRange::EMPTY`] for a degenerate tile.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn visible_tile_range(&self, canvas_w: f64, canvas_h: f64, tile_w: f64, tile_h: f64) -> TileRange {
        if tile_w <= 0.0 || tile_h <= 0.0 {
            return TileRange::EMPTY;
        }
        let offset = self.pixel_offset();
        let min_x = -offset.x / self.scale;
        let min_y = -offset.y / self.scale;
        let max_x = min_x + canvas_w / self.scale;
        let max_y = min_y + canvas_h / self.scale;

        TileRange {
            start_x: (min_x / tile_w).floor() as i64 - 1,
            start_y: (min_y / tile_h).floor() as i64 - 1,
            end_x: (max_x / tile_w).floor() as i64 + 1,
            end_y: (max_y / tile_h).floor() as i64 + 1,
        }
    }
}

/// Fold a sky-space point into `[0, tile_w) x [0, tile_h)`.
///
/// Identity when either tile dimension is not positive.
#[must_use]
pub fn wrap_to_tile(p: Point, tile_w: f64, tile_h: f64) -> Point {
    if tile_w <= 0.0 || tile_h <= 0.0 {
        return p;
    }
    Point { x: wrap(p.x, tile_w), y: wrap(p.y, tile_h) }
}

// Same result as `((v % size) + size) % size`, but values already inside
// the tile come back bit-identical.
fn wrap(v: f64, size: f64) -> f64 {
    let r = v % size;
    if r >= 0.0 {
        return r;
    }
    let shifted = r + size;
    if shifted >= size { 0.0 } else { shifted }
}
