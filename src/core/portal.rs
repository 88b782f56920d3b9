//! Portal renderer: moves the one media surface between mount points.
//!
//! The surface (video element plus its control chrome) is created once per
//! session. Relocation re-parents it; it is never re-created, because a fresh
//! element restarts at 0 and loses its buffer. Only [`PortalRenderer::teardown`]
//! destroys it.

use std::fmt;

use super::slot::{DockMode, DockTarget, MountPoint};

#[derive(Debug, Clone, PartialEq)]
pub enum PortalError {
    /// The container disappeared between resolution and render.
    MountMissing(MountPoint),
    /// The move command could not be delivered.
    Bridge(String),
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortalError::MountMissing(mount) => write!(f, "mount point '{}' is not attached", mount),
            PortalError::Bridge(reason) => write!(f, "portal bridge error: {}", reason),
        }
    }
}

impl std::error::Error for PortalError {}

/// The native side that owns the surface node.
pub trait SurfaceHost {
    /// Re-parent the existing surface under `mount`.
    fn relocate(&mut self, mount: &MountPoint) -> Result<(), PortalError>;
    /// Move the surface into the off-screen parking container.
    fn park(&mut self) -> Result<(), PortalError>;
    /// Destroy the surface for good.
    fn teardown(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SurfacePlacement {
    /// No surface exists (no session, or torn down).
    #[default]
    Absent,
    /// Alive but inert, off screen.
    Parked,
    Mounted(MountPoint),
}

impl SurfacePlacement {
    pub fn mount(&self) -> Option<&MountPoint> {
        match self {
            SurfacePlacement::Mounted(mount) => Some(mount),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct PortalRenderer<H> {
    host: H,
    placement: SurfacePlacement,
    relocations: u64,
}

impl<H: SurfaceHost> PortalRenderer<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            placement: SurfacePlacement::Absent,
            relocations: 0,
        }
    }

    pub fn placement(&self) -> &SurfacePlacement {
        &self.placement
    }

    /// Number of successful re-parent operations so far.
    pub fn relocations(&self) -> u64 {
        self.relocations
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// A new surface was created in the parking container.
    pub fn surface_created(&mut self) {
        self.placement = SurfacePlacement::Parked;
    }

    /// Bring the surface to `target`. A `Hidden` target parks it.
    ///
    /// On [`PortalError::MountMissing`] nothing moved; the caller is expected
    /// to re-resolve and try again.
    pub fn render(&mut self, target: &DockTarget) -> Result<(), PortalError> {
        if self.placement == SurfacePlacement::Absent {
            if target.mode != DockMode::Hidden {
                tracing::debug!(mode = ?target.mode, "no surface to render");
            }
            return Ok(());
        }

        let mount = match (target.mode, target.mount.as_ref()) {
            (DockMode::Hidden, _) | (_, None) => return self.park(),
            (_, Some(mount)) => mount,
        };

        if self.placement.mount() == Some(mount) {
            return Ok(());
        }

        self.host.relocate(mount)?;
        tracing::debug!(%mount, mode = ?target.mode, "surface relocated");
        self.placement = SurfacePlacement::Mounted(mount.clone());
        self.relocations += 1;
        Ok(())
    }

    /// Move the surface off screen without destroying it.
    pub fn park(&mut self) -> Result<(), PortalError> {
        if self.placement != SurfacePlacement::Absent && self.placement != SurfacePlacement::Parked {
            self.host.park()?;
            tracing::debug!("surface parked");
            self.placement = SurfacePlacement::Parked;
        }
        Ok(())
    }

    /// The host lost the mount the surface was in (container removed by a
    /// navigation race). The surface itself survives; it counts as parked.
    pub fn mount_lost(&mut self, mount: &MountPoint) -> bool {
        if self.placement.mount() == Some(mount) {
            self.placement = SurfacePlacement::Parked;
            return true;
        }
        false
    }

    /// Destroy the surface. Only used when the session is closed.
    pub fn teardown(&mut self) {
        if self.placement == SurfacePlacement::Absent {
            return;
        }
        self.host.teardown();
        self.placement = SurfacePlacement::Absent;
        tracing::debug!("surface torn down");
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    use super::*;

    /// Simulated DOM: a set of attached containers and a surface whose
    /// `generation` only changes when it is re-created.
    #[derive(Debug, Default)]
    pub struct FakeDom {
        pub attached: HashSet<MountPoint>,
        pub parent: Option<MountPoint>,
        pub parked: bool,
        pub generation: u32,
        pub alive: bool,
        pub moves: Vec<MountPoint>,
        /// Bridge down: every command fails.
        pub offline: bool,
    }

    #[derive(Debug, Clone, Default)]
    pub struct FakeHost {
        pub dom: Rc<RefCell<FakeDom>>,
    }

    impl FakeHost {
        pub fn new() -> Self {
            let host = Self::default();
            {
                let mut dom = host.dom.borrow_mut();
                dom.attached.insert(MountPoint::floating());
                dom.alive = true;
                dom.parked = true;
            }
            host
        }
    }

    impl SurfaceHost for FakeHost {
        fn relocate(&mut self, mount: &MountPoint) -> Result<(), PortalError> {
            let mut dom = self.dom.borrow_mut();
            if dom.offline {
                return Err(PortalError::Bridge("offline".to_string()));
            }
            if !dom.attached.contains(mount) {
                return Err(PortalError::MountMissing(mount.clone()));
            }
            if !dom.alive {
                dom.alive = true;
                dom.generation += 1;
            }
            dom.parent = Some(mount.clone());
            dom.parked = false;
            dom.moves.push(mount.clone());
            Ok(())
        }

        fn park(&mut self) -> Result<(), PortalError> {
            let mut dom = self.dom.borrow_mut();
            if dom.offline {
                return Err(PortalError::Bridge("offline".to_string()));
            }
            dom.parent = None;
            dom.parked = true;
            Ok(())
        }

        fn teardown(&mut self) {
            let mut dom = self.dom.borrow_mut();
            dom.alive = false;
            dom.parent = None;
            dom.parked = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::FakeHost;
    use super::*;
    use crate::constants::LESSON_DOCK_ID;

    fn lesson() -> MountPoint {
        MountPoint::new(LESSON_DOCK_ID)
    }

    fn renderer_with_lesson() -> (PortalRenderer<FakeHost>, FakeHost) {
        let host = FakeHost::new();
        host.dom.borrow_mut().attached.insert(lesson());
        let mut renderer = PortalRenderer::new(host.clone());
        renderer.surface_created();
        (renderer, host)
    }

    #[test]
    fn test_relocation_keeps_surface_identity() {
        let (mut renderer, host) = renderer_with_lesson();
        let dom = host.dom.clone();

        renderer.render(&DockTarget::docked(lesson())).unwrap();
        renderer.render(&DockTarget::floating()).unwrap();
        renderer.render(&DockTarget::docked(lesson())).unwrap();

        assert_eq!(renderer.placement(), &SurfacePlacement::Mounted(lesson()));
        assert_eq!(renderer.relocations(), 3);
        assert_eq!(dom.borrow().generation, 0, "surface must never be re-created");
    }

    #[test]
    fn test_render_same_mount_is_noop() {
        let (mut renderer, host) = renderer_with_lesson();
        renderer.render(&DockTarget::docked(lesson())).unwrap();
        renderer.render(&DockTarget::docked(lesson())).unwrap();
        assert_eq!(renderer.relocations(), 1);
        assert_eq!(host.dom.borrow().moves.len(), 1);
    }

    #[test]
    fn test_hidden_parks_instead_of_destroying() {
        let (mut renderer, host) = renderer_with_lesson();
        renderer.render(&DockTarget::docked(lesson())).unwrap();
        renderer.render(&DockTarget::hidden()).unwrap();
        assert_eq!(renderer.placement(), &SurfacePlacement::Parked);
        let dom = host.dom.borrow();
        assert!(dom.alive);
        assert!(dom.parked);
    }

    #[test]
    fn test_missing_mount_leaves_surface_in_place() {
        let (mut renderer, host) = renderer_with_lesson();
        renderer.render(&DockTarget::floating()).unwrap();
        host.dom.borrow_mut().attached.remove(&lesson());

        let err = renderer.render(&DockTarget::docked(lesson())).unwrap_err();
        assert_eq!(err, PortalError::MountMissing(lesson()));
        assert_eq!(renderer.placement(), &SurfacePlacement::Mounted(MountPoint::floating()));
        assert_eq!(host.dom.borrow().parent, Some(MountPoint::floating()));
    }

    #[test]
    fn test_absent_surface_is_not_rendered() {
        let host = FakeHost::new();
        let mut renderer = PortalRenderer::new(host.clone());
        renderer.render(&DockTarget::floating()).unwrap();
        assert_eq!(renderer.placement(), &SurfacePlacement::Absent);
        assert!(host.dom.borrow().moves.is_empty());
    }

    #[test]
    fn test_teardown_destroys_surface() {
        let (mut renderer, host) = renderer_with_lesson();
        renderer.render(&DockTarget::floating()).unwrap();
        renderer.teardown();
        assert_eq!(renderer.placement(), &SurfacePlacement::Absent);
        assert!(!host.dom.borrow().alive);
    }

    #[test]
    fn test_mount_lost_only_affects_current_mount() {
        let (mut renderer, _host) = renderer_with_lesson();
        renderer.render(&DockTarget::docked(lesson())).unwrap();
        assert!(!renderer.mount_lost(&MountPoint::floating()));
        assert!(renderer.mount_lost(&lesson()));
        assert_eq!(renderer.placement(), &SurfacePlacement::Parked);
    }
}
