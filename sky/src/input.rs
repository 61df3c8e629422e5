//! Input model: pointer buttons, wheel deltas, and the gesture state machine.
//!
//! A press is ambiguous until the pointer either moves past
//! [`crate::consts::DRAG_THRESHOLD_PX`] (it becomes a pan) or is released
//! in place (it becomes a click). `InputState` carries that context between
//! pointer events. All points here are CSS pixels relative to the canvas.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::{Point, ZoomDirection};

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

impl WheelDelta {
    /// Scrolling up zooms in, down zooms out; a purely horizontal scroll does nothing.
    #[must_use]
    pub fn zoom_direction(&self) -> Option<ZoomDirection> {
        if self.dy < 0.0 {
            Some(ZoomDirection::In)
        } else if self.dy > 0.0 {
            Some(ZoomDirection::Out)
        } else {
            None
        }
    }
}

/// The gesture in progress between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Pointer is down and has not yet moved far enough to pan.
    Pressed {
        /// Where the press started.
        origin: Point,
    },
    /// The user is dragging the sky.
    Panning {
        /// Position of the previous pointer event, used to compute the pan delta.
        last_screen: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }
}
