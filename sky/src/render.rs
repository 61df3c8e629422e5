//! Rendering: replays a planned frame on a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives the commands built by [`crate::tiles::plan_frame`] and produces
//! pixels; it does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::Point;
use crate::consts::{BACKGROUND_COLOR, LINK_COLOR, LINK_WIDTH, SELECTED_STAR_COLOR, STAR_COLOR};
use crate::tiles::DrawCommand;

/// Extra radius of the ring drawn around the selected star, in sky units.
const SELECTION_RING_PAD: f64 = 3.0;

/// Draw a full frame.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, commands: &[DrawCommand]) -> Result<(), JsValue> {
    let mut scale = 1.0;
    for command in commands {
        match *command {
            DrawCommand::Background { width, height } => draw_background(ctx, width, height)?,
            DrawCommand::View { translate, scale: s } => {
                scale = s;
                ctx.set_transform(s, 0.0, 0.0, s, translate.x, translate.y)?;
            }
            DrawCommand::BeginTile { origin } => {
                ctx.save();
                ctx.translate(origin.x, origin.y)?;
            }
            DrawCommand::EndTile => ctx.restore(),
            DrawCommand::Line { from, to } => draw_line(ctx, from, to, scale),
            DrawCommand::Star { center, radius, alpha, selected } => {
                draw_star(ctx, center, radius, alpha, selected, scale)?;
            }
        }
    }
    ctx.set_global_alpha(1.0);
    Ok(())
}

/// Paints the whole canvas under the identity transform.
fn draw_background(ctx: &CanvasRenderingContext2d, width: f64, height: f64) -> Result<(), JsValue> {
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.set_global_alpha(1.0);
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_fill_style_str(BACKGROUND_COLOR);
    ctx.fill_rect(0.0, 0.0, width, height);
    Ok(())
}

fn draw_line(ctx: &CanvasRenderingContext2d, from: Point, to: Point, scale: f64) {
    ctx.set_global_alpha(1.0);
    ctx.set_stroke_style_str(LINK_COLOR);
    // Constant on-screen width regardless of zoom.
    ctx.set_line_width(LINK_WIDTH / scale);
    ctx.begin_path();
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.stroke();
}

fn draw_star(
    ctx: &CanvasRenderingContext2d,
    center: Point,
    radius: f64,
    alpha: f64,
    selected: bool,
    scale: f64,
) -> Result<(), JsValue> {
    ctx.set_global_alpha(alpha);
    ctx.set_fill_style_str(if selected { SELECTED_STAR_COLOR } else { STAR_COLOR });
    ctx.begin_path();
    ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?;
    ctx.fill();

    if selected {
        ctx.set_global_alpha(1.0);
        ctx.set_stroke_style_str(SELECTED_STAR_COLOR);
        ctx.set_line_width(1.0 / scale);
        ctx.begin_path();
        ctx.arc(center.x, center.y, radius + SELECTION_RING_PAD, 0.0, 2.0 * PI)?;
        ctx.stroke();
    }
    Ok(())
}
