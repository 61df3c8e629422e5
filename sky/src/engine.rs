use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Point, ViewTransform};
use crate::config::SkyConfig;
use crate::consts::{DEFAULT_SEED, DRAG_THRESHOLD_PX};
use crate::hit::hit_test;
use crate::input::{Button, InputState, WheelDelta};
use crate::links::{Link, build_links};
use crate::myth::{MythDisplay, MythOutcome, MythRequest, MythTracker};
use crate::render;
use crate::seed::{SeedError, validate_seed};
use crate::star::{Star, StarId, TileGeometry, generate};
use crate::tiles::{DrawCommand, Scene, plan_frame};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    RenderNeeded,
    /// Selection changed; `None` means cleared.
    Selected(Option<StarId>),
    /// Look up the myth for a clicked star.
    FetchMyth(MythRequest),
    SetCursor(&'static str),
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
/// Stars, links and tile geometry are only replaced together through the
/// operations below, so a render or hit test never sees stars generated for
/// a different tile.
pub struct EngineCore {
    config: SkyConfig,
    seed: String,
    tile: TileGeometry,
    stars: Vec<Star>,
    links: Vec<Link>,
    view: ViewTransform,
    input: InputState,
    selected: Option<StarId>,
    myth: MythTracker,
    viewport_width: f64,
    viewport_height: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(SkyConfig::default())
    }
}

impl EngineCore {
    /// Create an engine with no canvas yet. Stars appear on the first
    /// [`EngineCore::set_viewport`].
    #[must_use]
    pub fn new(config: SkyConfig) -> Self {
        let seed = match validate_seed(&config.default_seed) {
            Ok(seed) => seed.to_owned(),
            Err(e) => {
                log::warn!("default seed {:?} rejected ({e}), using {DEFAULT_SEED}", config.default_seed);
                DEFAULT_SEED.to_owned()
            }
        };
        Self {
            config,
            seed,
            tile: TileGeometry::default(),
            stars: Vec::new(),
            links: Vec::new(),
            view: ViewTransform::default(),
            input: InputState::Idle,
            selected: None,
            myth: MythTracker::new(),
            viewport_width: 0.0,
            viewport_height: 0.0,
        }
    }

    // --- Generation ---

    fn regenerate(&mut self) {
        self.stars = generate(&self.seed, self.config.star_count, self.tile);
        self.rebuild_links();
        log::debug!(
            "generated {} stars, {} links for seed {:?} on {}x{} tile",
            self.stars.len(),
            self.links.len(),
            self.seed,
            self.tile.width,
            self.tile.height
        );
    }

    fn rebuild_links(&mut self) {
        self.links = build_links(&self.stars, self.config.link_params());
    }

    // --- Data inputs ---

    /// Update viewport size (CSS pixels) and device pixel ratio.
    ///
    /// The tile becomes the new canvas size and the star field is rebuilt
    /// for it before this returns.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        self.viewport_width = width_css.max(0.0);
        self.viewport_height = height_css.max(0.0);
        self.view.dpr = dpr;

        let (w, h) = self.canvas_size();
        self.tile = TileGeometry::new(f64::from(w), f64::from(h));
        self.regenerate();
        vec![Action::RenderNeeded]
    }

    /// Switch to a new seed.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] for empty or non-alphanumeric input; the engine
    /// is left untouched in that case.
    pub fn apply_seed(&mut self, raw: &str) -> Result<Vec<Action>, SeedError> {
        let seed = validate_seed(raw)?;
        self.seed = seed.to_owned();
        self.selected = None;
        self.myth.cancel_all();
        self.regenerate();
        Ok(vec![Action::Selected(None), Action::RenderNeeded])
    }

    pub fn set_max_neighbors(&mut self, max_neighbors: usize) -> Vec<Action> {
        self.config.max_neighbors = max_neighbors;
        self.rebuild_links();
        vec![Action::RenderNeeded]
    }

    pub fn set_max_distance(&mut self, max_distance: f64) -> Vec<Action> {
        self.config.max_distance = max_distance;
        self.rebuild_links();
        vec![Action::RenderNeeded]
    }

    pub fn set_show_lines(&mut self, show: bool) -> Vec<Action> {
        self.config.show_lines = show;
        vec![Action::RenderNeeded]
    }

    // --- Input events ---

    /// Points are CSS pixels relative to the canvas.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button == Button::Primary {
            self.input = InputState::Pressed { origin: screen_pt };
        }
        Vec::new()
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Pressed { origin } => {
                if origin.distance(screen_pt) < DRAG_THRESHOLD_PX {
                    return Vec::new();
                }
                self.view.pan(screen_pt.x - origin.x, screen_pt.y - origin.y);
                self.input = InputState::Panning { last_screen: screen_pt };
                vec![Action::SetCursor("grabbing"), Action::RenderNeeded]
            }
            InputState::Panning { last_screen } => {
                self.view.pan(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
                self.input = InputState::Panning { last_screen: screen_pt };
                vec![Action::RenderNeeded]
            }
        }
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let state = std::mem::take(&mut self.input);
        match state {
            InputState::Idle => Vec::new(),
            InputState::Pressed { .. } => self.click(screen_pt),
            InputState::Panning { .. } => vec![Action::SetCursor("grab")],
        }
    }

    /// Pointer left the canvas: abandon the gesture without clicking.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        let state = std::mem::take(&mut self.input);
        if state.is_panning() { vec![Action::SetCursor("grab")] } else { Vec::new() }
    }

    pub fn on_wheel(&mut self, delta: WheelDelta) -> Vec<Action> {
        match delta.zoom_direction() {
            Some(direction) => {
                self.view.zoom(direction);
                vec![Action::RenderNeeded]
            }
            None => Vec::new(),
        }
    }

    fn click(&mut self, screen_pt: Point) -> Vec<Action> {
        let dpr = self.view.dpr;
        let pixel = Point::new(screen_pt.x * dpr, screen_pt.y * dpr);
        let hit = hit_test(pixel, &self.view, &self.stars, self.tile, self.config.click_radius);
        self.selected = hit;

        match hit {
            Some(id) => {
                let request = self.myth.issue(&self.seed, id);
                log::debug!("star {id} selected, myth token {}", request.token);
                vec![Action::Selected(Some(id)), Action::FetchMyth(request), Action::RenderNeeded]
            }
            None => {
                self.myth.cancel_all();
                vec![Action::Selected(None), Action::RenderNeeded]
            }
        }
    }

    // --- Myth responses ---

    /// Accept a myth response. Returns what to display, or `None` if a newer
    /// request has superseded it.
    pub fn accept_myth(&mut self, token: u64, outcome: &MythOutcome) -> Option<MythDisplay> {
        if !self.myth.is_current(token) {
            log::debug!("discarding stale myth response (token {token})");
            return None;
        }
        if let MythOutcome::Rejected { status, message } = outcome {
            log::warn!("myth request rejected: {status} {message}");
        } else if let MythOutcome::Failed(reason) = outcome {
            log::warn!("myth request failed: {reason}");
        }
        Some(outcome.display())
    }

    // --- Rendering ---

    /// Draw commands for the current state.
    #[must_use]
    pub fn frame(&self) -> Vec<DrawCommand> {
        let (w, h) = self.canvas_size();
        plan_frame(&Scene {
            view: &self.view,
            stars: &self.stars,
            links: &self.links,
            tile: self.tile,
            canvas_width: f64::from(w),
            canvas_height: f64::from(h),
            show_lines: self.config.show_lines,
            selected: self.selected,
        })
    }

    // --- Queries ---

    /// Canvas backing-store size in device pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn canvas_size(&self) -> (u32, u32) {
        let dpr = self.view.dpr;
        ((self.viewport_width * dpr).floor() as u32, (self.viewport_height * dpr).floor() as u32)
    }

    #[must_use]
    pub fn seed(&self) -> &str {
        &self.seed
    }

    #[must_use]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    #[must_use]
    pub fn tile(&self) -> TileGeometry {
        self.tile
    }

    #[must_use]
    pub fn view(&self) -> ViewTransform {
        self.view
    }

    #[must_use]
    pub fn input(&self) -> InputState {
        self.input
    }

    #[must_use]
    pub fn selection(&self) -> Option<StarId> {
        self.selected
    }

    #[must_use]
    pub fn config(&self) -> &SkyConfig {
        &self.config
    }
}

/// The full sky engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, config: SkyConfig) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, core: EngineCore::new(config) })
    }

    // --- Viewport ---

    /// Resize the backing store and rebuild the star field for it.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        let actions = self.core.set_viewport(width_css, height_css, dpr);
        let (w, h) = self.core.canvas_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        actions
    }

    /// Set the CSS cursor on the canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the style property cannot be set.
    pub fn set_cursor(&self, cursor: &str) -> Result<(), JsValue> {
        self.canvas.style().set_property("cursor", cursor)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(&self.ctx, &self.core.frame())
    }
}
