//! Shared numeric and style constants for the sky crate.

// ── View ────────────────────────────────────────────────────────

/// Smallest allowed zoom scale. Keeps the visible tile range finite.
pub const MIN_SCALE: f64 = 0.1;

/// Fractional scale change per zoom step.
pub const ZOOM_STEP: f64 = 0.1;

// ── Input ───────────────────────────────────────────────────────

/// Pointer travel in CSS pixels before a press becomes a pan.
pub const DRAG_THRESHOLD_PX: f64 = 3.0;

// ── Generation defaults ─────────────────────────────────────────

pub const DEFAULT_STAR_COUNT: usize = 200;
pub const DEFAULT_MAX_DISTANCE: f64 = 140.0;
pub const DEFAULT_MAX_NEIGHBORS: usize = 2;
pub const DEFAULT_CLICK_RADIUS: f64 = 8.0;
pub const DEFAULT_SEED: &str = "orion";

// ── Style ───────────────────────────────────────────────────────

pub const BACKGROUND_COLOR: &str = "#060912";
pub const STAR_COLOR: &str = "#cfe3ff";
pub const LINK_COLOR: &str = "rgba(207, 227, 255, 0.28)";
pub const LINK_WIDTH: f64 = 0.8;
pub const SELECTED_STAR_COLOR: &str = "#ffd98a";
