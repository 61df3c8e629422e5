//! `#[wasm_bindgen]` surface used by the page.
//!
//! The page forwards DOM events here and registers callbacks for selection
//! and myth text. Each handler runs the engine to completion, applies the
//! resulting [`Action`]s, and redraws when asked; myth fetches are the only
//! work that outlives a handler.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::camera::Point;
use crate::config::SkyConfig;
use crate::engine::{Action, Engine};
use crate::input::{Button, WheelDelta};
use crate::myth::{MythRequest, fetch_myth};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("console logger not installed: {e}")));
    }
}

/// Handle to one sky canvas.
#[wasm_bindgen]
pub struct SkyApp {
    engine: Rc<RefCell<Engine>>,
    on_select: Option<js_sys::Function>,
    on_myth: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl SkyApp {
    /// `config_json` overrides any subset of [`SkyConfig`].
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<SkyApp, JsValue> {
        let config = match config_json {
            Some(json) => SkyConfig::from_json(&json).map_err(|e| JsValue::from_str(&format!("invalid config: {e}")))?,
            None => SkyConfig::default(),
        };
        let engine = Engine::new(canvas, config)?;
        log::info!("sky ready, seed {:?}", engine.core.seed());
        Ok(Self { engine: Rc::new(RefCell::new(engine)), on_select: None, on_myth: None })
    }

    /// `callback(starId | null)` on every selection change.
    #[wasm_bindgen(js_name = onSelect)]
    pub fn on_select(&mut self, callback: js_sys::Function) {
        self.on_select = Some(callback);
    }

    /// `callback(title, text)` when a myth (or its fallback) is ready.
    #[wasm_bindgen(js_name = onMyth)]
    pub fn on_myth(&mut self, callback: js_sys::Function) {
        self.on_myth = Some(callback);
    }

    // --- Host inputs ---

    pub fn resize(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Result<(), JsValue> {
        let actions = self.engine.borrow_mut().set_viewport(width_css, height_css, dpr);
        self.apply(actions)
    }

    /// Rejects invalid seeds with a readable message and leaves the sky unchanged.
    #[wasm_bindgen(js_name = applySeed)]
    pub fn apply_seed(&mut self, seed: &str) -> Result<(), JsValue> {
        let result = self.engine.borrow_mut().core.apply_seed(seed);
        match result {
            Ok(actions) => self.apply(actions),
            Err(e) => Err(JsValue::from_str(&e.to_string())),
        }
    }

    #[wasm_bindgen(js_name = setMaxNeighbors)]
    pub fn set_max_neighbors(&mut self, max_neighbors: u32) -> Result<(), JsValue> {
        let max_neighbors = usize::try_from(max_neighbors).unwrap_or(usize::MAX);
        let actions = self.engine.borrow_mut().core.set_max_neighbors(max_neighbors);
        self.apply(actions)
    }

    #[wasm_bindgen(js_name = setMaxDistance)]
    pub fn set_max_distance(&mut self, max_distance: f64) -> Result<(), JsValue> {
        let actions = self.engine.borrow_mut().core.set_max_distance(max_distance);
        self.apply(actions)
    }

    #[wasm_bindgen(js_name = setShowLines)]
    pub fn set_show_lines(&mut self, show: bool) -> Result<(), JsValue> {
        let actions = self.engine.borrow_mut().core.set_show_lines(show);
        self.apply(actions)
    }

    // --- DOM events (CSS pixels relative to the canvas) ---

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f64, y: f64, button: i16) -> Result<(), JsValue> {
        let actions = self.engine.borrow_mut().core.on_pointer_down(Point::new(x, y), Button::from_dom(button));
        self.apply(actions)
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        let actions = self.engine.borrow_mut().core.on_pointer_move(Point::new(x, y));
        self.apply(actions)
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, x: f64, y: f64, button: i16) -> Result<(), JsValue> {
        let actions = self.engine.borrow_mut().core.on_pointer_up(Point::new(x, y), Button::from_dom(button));
        self.apply(actions)
    }

    #[wasm_bindgen(js_name = pointerLeave)]
    pub fn pointer_leave(&mut self) -> Result<(), JsValue> {
        let actions = self.engine.borrow_mut().core.on_pointer_leave();
        self.apply(actions)
    }

    pub fn wheel(&mut self, dx: f64, dy: f64) -> Result<(), JsValue> {
        let actions = self.engine.borrow_mut().core.on_wheel(WheelDelta { dx, dy });
        self.apply(actions)
    }

    // --- Queries ---

    pub fn seed(&self) -> String {
        self.engine.borrow().core.seed().to_owned()
    }

    pub fn render(&self) -> Result<(), JsValue> {
        self.engine.borrow().render()
    }
}

impl SkyApp {
    fn apply(&self, actions: Vec<Action>) -> Result<(), JsValue> {
        let mut render = false;
        for action in actions {
            match action {
                Action::RenderNeeded => render = true,
                Action::Selected(id) => self.notify_select(id.map_or(JsValue::NULL, JsValue::from)),
                Action::FetchMyth(request) => self.spawn_myth_fetch(request),
                Action::SetCursor(cursor) => self.engine.borrow().set_cursor(cursor)?,
            }
        }
        if render {
            self.engine.borrow().render()?;
        }
        Ok(())
    }

    fn notify_select(&self, id: JsValue) {
        if let Some(callback) = &self.on_select {
            if let Err(e) = callback.call1(&JsValue::NULL, &id) {
                log::warn!("onSelect callback threw: {e:?}");
            }
        }
    }

    fn spawn_myth_fetch(&self, request: MythRequest) {
        let engine = Rc::clone(&self.engine);
        let on_myth = self.on_myth.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = fetch_myth(&request).await;
            let display = engine.borrow_mut().core.accept_myth(request.token, &outcome);
            let (Some(display), Some(callback)) = (display, on_myth) else {
                return;
            };
            let title = JsValue::from_str(&display.title);
            let text = JsValue::from_str(&display.text);
            if let Err(e) = callback.call2(&JsValue::NULL, &title, &text) {
                log::warn!("onMyth callback threw: {e:?}");
            }
        });
    }
}
