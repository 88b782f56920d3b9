//! Slot resolution: which mount point hosts the media surface right now.
//!
//! The resolver itself is a pure function. The [`DockRegistry`] is the
//! engine's view of which docking containers are currently attached to the
//! live DOM and where they sit relative to the viewport.

use std::collections::HashMap;
use std::fmt;

use crate::constants::FLOATING_MOUNT_ID;
use crate::state::Route;

use super::geometry::Rect;

/// DOM id of a container that can host the media surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MountPoint(String);

impl MountPoint {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn floating() -> Self {
        Self(FLOATING_MOUNT_ID.to_string())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MountPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DockMode {
    Docked,
    Floating,
    Hidden,
}

impl DockMode {
    pub fn label(self) -> &'static str {
        match self {
            DockMode::Docked => "Docked",
            DockMode::Floating => "Floating",
            DockMode::Hidden => "Hidden",
        }
    }
}

/// Where the surface should live. `Docked` always carries its container;
/// `Floating` carries the overlay mount; `Hidden` carries nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockTarget {
    pub mode: DockMode,
    pub mount: Option<MountPoint>,
}

impl DockTarget {
    pub fn hidden() -> Self {
        Self {
            mode: DockMode::Hidden,
            mount: None,
        }
    }

    pub fn floating() -> Self {
        Self {
            mode: DockMode::Floating,
            mount: Some(MountPoint::floating()),
        }
    }

    pub fn docked(mount: MountPoint) -> Self {
        Self {
            mode: DockMode::Docked,
            mount: Some(mount),
        }
    }
}

/// Last known state of one docking container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorState {
    /// Bounding box reported by the geometry bridge, if any yet.
    pub bounds: Option<Rect>,
    /// The container has scrolled entirely above the viewport top.
    pub scrolled_past: bool,
}

/// Docking containers currently attached to the document.
#[derive(Debug, Clone, Default)]
pub struct DockRegistry {
    anchors: HashMap<MountPoint, AnchorState>,
}

impl DockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a container mounted. Re-attaching keeps nothing from a
    /// previous life of the same id.
    pub fn attach(&mut self, mount: MountPoint) {
        self.anchors.insert(mount, AnchorState::default());
    }

    /// Record that a container was removed from the document.
    pub fn detach(&mut self, mount: &MountPoint) -> bool {
        self.anchors.remove(mount).is_some()
    }

    pub fn state(&self, mount: &MountPoint) -> Option<&AnchorState> {
        self.anchors.get(mount)
    }

    /// Apply a bounding box sample. Returns whether the scrolled-past flag flipped.
    /// Samples for containers that are not attached are ignored.
    pub fn update_bounds(&mut self, mount: &MountPoint, bounds: Rect) -> bool {
        let Some(state) = self.anchors.get_mut(mount) else {
            return false;
        };
        let scrolled_past = bounds.is_above_viewport();
        let flipped = state.scrolled_past != scrolled_past;
        state.bounds = Some(bounds);
        state.scrolled_past = scrolled_past;
        flipped
    }

    /// Forget scroll state, e.g. after the view scrolled the container back in.
    pub fn reset_scroll(&mut self, mount: &MountPoint) {
        if let Some(state) = self.anchors.get_mut(mount) {
            state.scrolled_past = false;
        }
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }
}

/// Decide the dock target for the current route.
///
/// 1. No session ⇒ `Hidden`.
/// 2. The route's container is attached and still (partly) on screen ⇒ `Docked`.
/// 3. Otherwise ⇒ `Floating`.
pub fn resolve_dock_target(route: Route, anchors: &DockRegistry, session_active: bool) -> DockTarget {
    if !session_active {
        return DockTarget::hidden();
    }

    if let Some(container) = route.dock_container() {
        let mount = MountPoint::new(container);
        if let Some(state) = anchors.state(&mount) {
            if !state.scrolled_past {
                return DockTarget::docked(mount);
            }
        }
    }

    DockTarget::floating()
}
