//! Floating overlay shell: the draggable picture-in-picture chrome.
//!
//! Drag state machine:
//!
//! ```text
//!   Idle ──pointerdown (draggable region)──► ArmedNotCommitted
//!   ArmedNotCommitted ──move < threshold──► ArmedNotCommitted
//!   ArmedNotCommitted ──move ≥ threshold──► Dragging
//!   Dragging ──move──► Dragging
//!   ArmedNotCommitted | Dragging ──pointerup / pointercancel──► Idle
//! ```

use std::collections::HashSet;

use super::drag::{clamp_position, compute_next_position, default_position, DragConfig, DragSession, FloatingPosition};
use super::geometry::{Point, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    ArmedNotCommitted,
    Dragging,
}

/// Hit regions of the overlay. Everything except `Surface` is an interactive
/// control by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayRegion {
    Surface,
    Scrubber,
    PlayPause,
    Mute,
    Restore,
    Close,
}

impl OverlayRegion {
    pub const CONTROLS: [OverlayRegion; 5] = [
        OverlayRegion::Scrubber,
        OverlayRegion::PlayPause,
        OverlayRegion::Mute,
        OverlayRegion::Restore,
        OverlayRegion::Close,
    ];
}

/// What the release of a pointer means for the click that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerRelease {
    /// No session was active (duplicate or stray event).
    NoSession,
    /// Displacement stayed under the threshold; the click goes through.
    Click,
    /// The overlay was dragged; the click must be swallowed.
    DragEnded,
}

/// Actions the chrome exposes besides dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAction {
    /// Go back to the docked view.
    Restore,
    /// End the playback session.
    Close,
}

#[derive(Debug, Clone)]
pub struct OverlayShell {
    config: DragConfig,
    overlay_size: Size,
    viewport: Size,
    position: Option<FloatingPosition>,
    session: Option<DragSession>,
    phase: DragPhase,
    non_draggable: HashSet<OverlayRegion>,
    suppress_click: bool,
}

impl OverlayShell {
    pub fn new(config: DragConfig, overlay_size: Size, viewport: Size) -> Self {
        Self {
            config,
            overlay_size,
            viewport,
            position: None,
            session: None,
            phase: DragPhase::Idle,
            non_draggable: OverlayRegion::CONTROLS.into_iter().collect(),
            suppress_click: false,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Current position, if floating mode has been entered.
    pub fn position(&self) -> Option<FloatingPosition> {
        self.position
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn is_draggable(&self, region: OverlayRegion) -> bool {
        !self.non_draggable.contains(&region)
    }

    /// Called when floating mode starts. Keeps the last position if there is one.
    pub fn enter_floating(&mut self) -> FloatingPosition {
        let position = match self.position {
            Some(previous) => clamp_position(previous, self.overlay_size, self.viewport, self.config.margin_px),
            None => default_position(self.overlay_size, self.viewport, self.config.margin_px),
        };
        self.position = Some(position);
        position
    }

    /// Called when floating mode ends. Any drag in flight is abandoned.
    pub fn leave_floating(&mut self) {
        self.session = None;
        self.phase = DragPhase::Idle;
        self.suppress_click = false;
    }

    /// Viewport size changed; re-clamp the resting position.
    pub fn resize_viewport(&mut self, viewport: Size) -> Option<FloatingPosition> {
        self.viewport = viewport;
        let position = self.position?;
        let clamped = clamp_position(position, self.overlay_size, viewport, self.config.margin_px);
        self.position = Some(clamped);
        Some(clamped)
    }

    /// Returns whether a drag session was armed.
    pub fn pointer_down(&mut self, region: OverlayRegion, pointer: Point) -> bool {
        if !self.is_draggable(region) {
            return false;
        }
        let Some(position) = self.position else {
            return false;
        };
        self.session = Some(DragSession::begin(pointer, position));
        self.phase = DragPhase::ArmedNotCommitted;
        self.suppress_click = false;
        true
    }

    /// Returns the new position when the overlay moved.
    pub fn pointer_move(&mut self, pointer: Point) -> Option<FloatingPosition> {
        let session = self.session.as_mut()?;
        let step = compute_next_position(session, pointer, self.overlay_size, self.viewport, &self.config);
        if !step.committed {
            return None;
        }
        if !session.has_moved_past_threshold {
            session.has_moved_past_threshold = true;
            self.phase = DragPhase::Dragging;
            tracing::debug!(x = step.position.x, y = step.position.y, "overlay drag committed");
        }
        if self.position == Some(step.position) {
            return None;
        }
        self.position = Some(step.position);
        Some(step.position)
    }

    pub fn pointer_up(&mut self) -> PointerRelease {
        let Some(session) = self.session.take() else {
            return PointerRelease::NoSession;
        };
        self.phase = DragPhase::Idle;
        if session.has_moved_past_threshold {
            self.suppress_click = true;
            PointerRelease::DragEnded
        } else {
            PointerRelease::Click
        }
    }

    /// Interrupted gesture: back to idle, keeping whatever position was last computed.
    pub fn pointer_cancel(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("overlay drag cancelled");
        }
        self.phase = DragPhase::Idle;
    }

    /// Whether a click on the surface should be acted on. Consumes the
    /// suppression left by a committed drag.
    pub fn accept_click(&mut self) -> bool {
        if self.suppress_click {
            self.suppress_click = false;
            return false;
        }
        self.phase == DragPhase::Idle
    }
}
