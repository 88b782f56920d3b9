//! Drag controller: pointer displacement to clamped overlay position.
//!
//! Everything here is pure arithmetic so it can run on every `pointermove`
//! without throttling.

use serde::{Deserialize, Serialize};

use super::geometry::{Point, Size};

/// Tunables for dragging the floating overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragConfig {
    /// Minimum displacement on either axis before a press becomes a drag.
    #[serde(default = "default_commit_threshold_px")]
    pub commit_threshold_px: f64,
    /// Multiplier applied to the pointer delta once committed.
    #[serde(default = "default_speed")]
    pub speed: f64,
    /// Gap kept between the overlay and every viewport edge.
    #[serde(default = "default_margin_px")]
    pub margin_px: f64,
}

fn default_commit_threshold_px() -> f64 {
    5.0
}

fn default_speed() -> f64 {
    1.25
}

fn default_margin_px() -> f64 {
    16.0
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            commit_threshold_px: default_commit_threshold_px(),
            speed: default_speed(),
            margin_px: default_margin_px(),
        }
    }
}

/// Top-left corner of the floating overlay, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FloatingPosition {
    pub x: f64,
    pub y: f64,
}

impl FloatingPosition {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// State captured at pointer-down on the draggable chrome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub start_pointer: Point,
    pub start_offset: FloatingPosition,
    pub has_moved_past_threshold: bool,
}

impl DragSession {
    pub fn begin(start_pointer: Point, start_offset: FloatingPosition) -> Self {
        Self {
            start_pointer,
            start_offset,
            has_moved_past_threshold: false,
        }
    }
}

/// Result of feeding one pointer sample through the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragStep {
    /// Whether the session is (now) a committed drag.
    pub committed: bool,
    /// Position to render. Equal to the start offset while uncommitted.
    pub position: FloatingPosition,
}

/// Compute where the overlay should be for the given pointer sample.
///
/// A session that already committed stays committed even if the pointer
/// wanders back inside the threshold.
pub fn compute_next_position(
    session: &DragSession,
    pointer: Point,
    overlay: Size,
    viewport: Size,
    config: &DragConfig,
) -> DragStep {
    let raw_dx = pointer.x - session.start_pointer.x;
    let raw_dy = pointer.y - session.start_pointer.y;

    let committed = session.has_moved_past_threshold
        || raw_dx.abs() >= config.commit_threshold_px
        || raw_dy.abs() >= config.commit_threshold_px;

    if !committed {
        return DragStep {
            committed: false,
            position: session.start_offset,
        };
    }

    let proposed = FloatingPosition {
        x: session.start_offset.x + raw_dx * config.speed,
        y: session.start_offset.y + raw_dy * config.speed,
    };

    DragStep {
        committed: true,
        position: clamp_position(proposed, overlay, viewport, config.margin_px),
    }
}

/// Keep the whole overlay inside the viewport minus `margin` on every side.
///
/// If the viewport is too small to honor both margins on an axis, the overlay
/// is pinned to `margin` on that axis.
pub fn clamp_position(
    position: FloatingPosition,
    overlay: Size,
    viewport: Size,
    margin: f64,
) -> FloatingPosition {
    FloatingPosition {
        x: clamp_axis(position.x, overlay.width, viewport.width, margin),
        y: clamp_axis(position.y, overlay.height, viewport.height, margin),
    }
}

fn clamp_axis(value: f64, extent: f64, viewport: f64, margin: f64) -> f64 {
    let max = viewport - extent - margin;
    if !value.is_finite() || max <= margin {
        return margin;
    }
    value.clamp(margin, max)
}

/// Bottom-right resting spot used when floating mode starts without a prior position.
pub fn default_position(overlay: Size, viewport: Size, margin: f64) -> FloatingPosition {
    clamp_position(
        FloatingPosition {
            x: viewport.width - overlay.width - margin,
            y: viewport.height - overlay.height - margin,
        },
        overlay,
        viewport,
        margin,
    )
}
