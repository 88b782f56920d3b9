//! Media surface manager.
//!
//! Owns the playback store, the portal renderer, the overlay shell and the
//! dock registry, and routes every outside signal through them:
//!
//! ```text
//!   navigate / scroll / anchor mount ──► resolve_dock_target() ──► DockTarget
//!                                                                      │
//!        ┌─────────────────────────────────────────────────────────────┘
//!        ▼
//!   PortalRenderer::render() ──► surface re-parented (never re-created)
//!        │
//!        └── Floating ──► OverlayShell (pointer events ──► drag controller)
//! ```
//!
//! One instance exists per application session and is injected into the views.

use crate::state::{PlayerSettings, Route};

use super::drag::FloatingPosition;
use super::geometry::{Point, Rect, Size};
use super::overlay::{OverlayAction, OverlayRegion, OverlayShell, PointerRelease};
use super::playback::{MediaElement, MediaElementId, MediaEvent, PlaybackState, PlaybackStore, Registration};
use super::portal::{PortalError, PortalRenderer, SurfaceHost, SurfacePlacement};
use super::slot::{resolve_dock_target, DockMode, DockRegistry, DockTarget, MountPoint};

/// Bounded number of resolve/render rounds when mounts vanish under us.
const MAX_RENDER_ATTEMPTS: usize = 3;

#[derive(Debug)]
pub struct MediaSurfaceManager<H: SurfaceHost> {
    playback: PlaybackStore,
    portal: PortalRenderer<H>,
    overlay: OverlayShell,
    anchors: DockRegistry,
    route: Route,
    target: DockTarget,
    restore_route: Route,
    scroll_request: Option<MountPoint>,
}

impl<H: SurfaceHost> MediaSurfaceManager<H> {
    pub fn new(settings: &PlayerSettings, host: H) -> Self {
        Self {
            playback: PlaybackStore::new(),
            portal: PortalRenderer::new(host),
            overlay: OverlayShell::new(settings.drag, settings.overlay_size(), settings.window_size()),
            anchors: DockRegistry::new(),
            route: Route::from_path(&settings.last_path),
            target: DockTarget::hidden(),
            restore_route: Route::Lesson,
            scroll_request: None,
        }
    }

    // -- Read access --

    pub fn route(&self) -> Route {
        self.route
    }

    /// The target that is actually live right now.
    pub fn target(&self) -> &DockTarget {
        &self.target
    }

    pub fn mode(&self) -> DockMode {
        self.target.mode
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn has_session(&self) -> bool {
        self.playback.has_session()
    }

    pub fn element_id(&self) -> Option<MediaElementId> {
        self.playback.element_id()
    }

    pub fn placement(&self) -> &SurfacePlacement {
        self.portal.placement()
    }

    pub fn overlay(&self) -> &OverlayShell {
        &self.overlay
    }

    pub fn floating_position(&self) -> Option<FloatingPosition> {
        match self.target.mode {
            DockMode::Floating => self.overlay.position(),
            _ => None,
        }
    }

    pub fn host(&self) -> &H {
        self.portal.host()
    }

    pub fn host_mut(&mut self) -> &mut H {
        self.portal.host_mut()
    }

    /// Container the view should scroll into view, set by a restore.
    pub fn take_scroll_request(&mut self) -> Option<MountPoint> {
        self.scroll_request.take()
    }

    // -- Session lifecycle --

    /// Bind a freshly mounted surface element and place it.
    pub fn open_session(&mut self, element: Box<dyn MediaElement>) {
        match self.playback.register(element) {
            Registration::AlreadyBound => {}
            Registration::Bound | Registration::Replaced(_) => self.portal.surface_created(),
        }
        self.refresh();
    }

    /// The view holding the element unmounted without an explicit close.
    pub fn surface_unmounted(&mut self, id: MediaElementId) {
        if self.playback.unregister(id) {
            self.portal.teardown();
            self.refresh();
        }
    }

    /// Tear the session down; the resolver yields `Hidden` afterwards.
    pub fn close_video(&mut self) {
        if self.playback.close_video().is_some() {
            self.portal.teardown();
        }
        self.refresh();
    }

    // -- Playback intents --

    pub fn toggle_play(&mut self) {
        self.playback.toggle_play();
    }

    pub fn toggle_mute(&mut self) {
        self.playback.toggle_mute();
    }

    pub fn seek_to(&mut self, seconds: f64) {
        self.playback.seek_to(seconds);
    }

    pub fn seek_by(&mut self, delta_seconds: f64) {
        let current = self.playback.current_time();
        self.playback.seek_to(current + delta_seconds);
    }

    pub fn handle_media_event(&mut self, source: MediaElementId, event: MediaEvent) {
        self.playback.handle_event(source, event);
    }

    // -- Environment signals --

    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        tracing::info!(from = ?self.route, to = ?route, "navigate");
        self.route = route;
        self.refresh();
    }

    pub fn anchor_mounted(&mut self, mount: MountPoint) {
        self.anchors.attach(mount.clone());
        tracing::debug!(%mount, containers = self.anchors.len(), "dock container attached");
        self.refresh();
    }

    pub fn anchor_unmounted(&mut self, mount: &MountPoint) {
        if !self.anchors.detach(mount) {
            return;
        }
        tracing::debug!(%mount, containers = self.anchors.len(), "dock container detached");
        self.portal.mount_lost(mount);
        self.refresh();
    }

    /// The host was (re)connected; commands sent while it was down are lost.
    pub fn reconnected(&mut self) {
        tracing::debug!("surface host connected");
        self.refresh();
    }

    /// The host could not find `mount` when it tried to move the surface there.
    pub fn mount_missing(&mut self, mount: &MountPoint) {
        if self.portal.mount_lost(mount) {
            tracing::warn!(%mount, "surface lost its mount, re-resolving");
            self.anchors.detach(mount);
            self.refresh();
        }
    }

    /// Geometry sample from the view: viewport size and dock container boxes.
    pub fn geometry_changed(&mut self, viewport: Size, anchors: &[(MountPoint, Rect)]) {
        if viewport != self.overlay.viewport() {
            if let Some(position) = self.overlay.resize_viewport(viewport) {
                tracing::debug!(x = position.x, y = position.y, "overlay re-clamped to viewport");
            }
        }

        let mut flipped = false;
        for (mount, rect) in anchors {
            flipped |= self.anchors.update_bounds(mount, *rect);
        }

        // With a session the resolver never yields Hidden, so a hidden
        // surface here means the last relocation did not go through.
        let stale = self.target.mode == DockMode::Hidden && self.playback.has_session();
        if stale || (flipped && self.route.dock_container().is_some()) {
            self.refresh();
        }
    }

    // -- Floating overlay --

    pub fn overlay_pointer_down(&mut self, region: OverlayRegion, pointer: Point) -> bool {
        if self.target.mode != DockMode::Floating {
            return false;
        }
        self.overlay.pointer_down(region, pointer)
    }

    pub fn overlay_pointer_move(&mut self, pointer: Point) -> Option<FloatingPosition> {
        self.overlay.pointer_move(pointer)
    }

    pub fn overlay_pointer_up(&mut self) -> PointerRelease {
        self.overlay.pointer_up()
    }

    pub fn overlay_pointer_cancel(&mut self) {
        self.overlay.pointer_cancel();
    }

    /// A click landed on the overlay surface: toggles playback unless it is
    /// the tail of a drag.
    pub fn overlay_surface_click(&mut self) -> bool {
        if !self.overlay.accept_click() {
            return false;
        }
        self.playback.toggle_play();
        true
    }

    pub fn overlay_action(&mut self, action: OverlayAction) {
        match action {
            OverlayAction::Restore => self.restore(),
            OverlayAction::Close => self.close_video(),
        }
    }

    /// Return to the view that last docked the surface and bring its
    /// container back into view.
    pub fn restore(&mut self) {
        let route = self.restore_route;
        if let Some(container) = route.dock_container() {
            let mount = MountPoint::new(container);
            self.anchors.reset_scroll(&mount);
            self.scroll_request = Some(mount);
        }
        if route == self.route {
            self.refresh();
        } else {
            self.navigate(route);
        }
    }

    /// Resolve the dock target and bring the surface there. A mount the host
    /// cannot find is dropped from the registry and the target re-resolved.
    fn refresh(&mut self) {
        let active = self.playback.has_session();
        let mut settled = false;
        for _ in 0..MAX_RENDER_ATTEMPTS {
            let resolved = resolve_dock_target(self.route, &self.anchors, active);
            match self.portal.render(&resolved) {
                Ok(()) => {
                    settled = true;
                    break;
                }
                Err(PortalError::MountMissing(mount)) => {
                    tracing::warn!(%mount, "mount vanished before render, re-resolving");
                    self.anchors.detach(&mount);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "surface relocation failed");
                    settled = true;
                    break;
                }
            }
        }
        if !settled {
            tracing::warn!("no stable mount after re-resolving, parking surface");
            if let Err(err) = self.portal.park() {
                tracing::warn!(error = %err, "failed to park surface");
            }
        }

        let floating = MountPoint::floating();
        let live = match self.portal.placement() {
            SurfacePlacement::Mounted(mount) if *mount == floating => DockTarget::floating(),
            SurfacePlacement::Mounted(mount) => DockTarget::docked(mount.clone()),
            SurfacePlacement::Parked | SurfacePlacement::Absent => DockTarget::hidden(),
        };

        if live.mode == DockMode::Docked {
            self.restore_route = self.route;
        }

        match (self.target.mode, live.mode) {
            (DockMode::Floating, DockMode::Floating) => {}
            (_, DockMode::Floating) => {
                let position = self.overlay.enter_floating();
                tracing::debug!(x = position.x, y = position.y, "overlay shown");
            }
            (DockMode::Floating, _) => self.overlay.leave_floating(),
            _ => {}
        }

        if live != self.target {
            tracing::info!(
                from = ?self.target.mode,
                to = ?live.mode,
                relocations = self.portal.relocations(),
                "dock target changed"
            );
        }
        self.target = live;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::LESSON_DOCK_ID;
    use crate::core::overlay::DragPhase;
    use crate::core::playback::test_support::{Call, FakeMedia};
    use crate::core::portal::test_support::FakeHost;

    fn lesson() -> MountPoint {
        MountPoint::new(LESSON_DOCK_ID)
    }

    fn settings() -> PlayerSettings {
        PlayerSettings {
            window_width: 1280.0,
            window_height: 720.0,
            ..PlayerSettings::default()
        }
    }

    struct Rig {
        manager: MediaSurfaceManager<FakeHost>,
        host: FakeHost,
        media: MediaElementId,
        calls: std::rc::Rc<std::cell::RefCell<Vec<Call>>>,
    }

    /// Session open and docked on the lesson page, playing at 42 s.
    fn docked_and_playing() -> Rig {
        let host = FakeHost::new();
        host.dom.borrow_mut().attached.insert(lesson());
        let mut manager = MediaSurfaceManager::new(&settings(), host.clone());
        manager.navigate(Route::Lesson);
        manager.anchor_mounted(lesson());

        let (fake, calls) = FakeMedia::new();
        let media = fake.id;
        manager.open_session(Box::new(fake));
        manager.toggle_play();
        manager.handle_media_event(media, MediaEvent::Play);
        manager.handle_media_event(media, MediaEvent::DurationChange(600.0));
        manager.handle_media_event(media, MediaEvent::TimeUpdate(42.0));
        Rig { manager, host, media, calls }
    }

    fn leave_lesson(rig: &mut Rig, to: Route) {
        rig.host.dom.borrow_mut().attached.remove(&lesson());
        rig.manager.navigate(to);
        rig.manager.anchor_unmounted(&lesson());
    }

    fn enter_lesson(rig: &mut Rig) {
        rig.host.dom.borrow_mut().attached.insert(lesson());
        rig.manager.navigate(Route::Lesson);
        rig.manager.anchor_mounted(lesson());
    }

    #[test]
    fn test_no_session_is_hidden() {
        let mut manager = MediaSurfaceManager::new(&settings(), FakeHost::new());
        manager.navigate(Route::Lesson);
        manager.anchor_mounted(lesson());
        assert_eq!(manager.mode(), DockMode::Hidden);
        assert_eq!(manager.placement(), &SurfacePlacement::Absent);
    }

    #[test]
    fn test_open_session_docks_on_lesson() {
        let rig = docked_and_playing();
        assert_eq!(rig.manager.target(), &DockTarget::docked(lesson()));
        assert_eq!(rig.host.dom.borrow().parent, Some(lesson()));
        assert!(rig.manager.playback().is_playing);
    }

    #[test]
    fn test_leaving_dock_page_floats_without_pausing() {
        let mut rig = docked_and_playing();
        leave_lesson(&mut rig, Route::Notes);

        assert_eq!(rig.manager.mode(), DockMode::Floating);
        assert_eq!(rig.host.dom.borrow().parent, Some(MountPoint::floating()));
        assert!(rig.manager.playback().is_playing);
        assert!(!rig.calls.borrow().contains(&Call::Pause));
        assert_eq!(
            rig.manager.floating_position(),
            Some(FloatingPosition::new(944.0, 524.0))
        );
    }

    #[test]
    fn test_dock_float_dock_round_trip_keeps_position_and_single_play() {
        let mut rig = docked_and_playing();
        leave_lesson(&mut rig, Route::Subscription);
        rig.manager.handle_media_event(rig.media, MediaEvent::TimeUpdate(43.5));
        enter_lesson(&mut rig);

        assert_eq!(rig.manager.mode(), DockMode::Docked);
        assert_eq!(rig.manager.playback().current_time_seconds, 43.5);
        let plays = rig.calls.borrow().iter().filter(|call| **call == Call::Play).count();
        assert_eq!(plays, 1);
        assert_eq!(rig.host.dom.borrow().generation, 0);
        assert!(rig.manager.overlay().position().is_some());
    }

    #[test]
    fn test_scroll_past_dock_floats_and_scroll_back_docks() {
        let mut rig = docked_and_playing();
        let viewport = Size::new(1280.0, 720.0);

        rig.manager
            .geometry_changed(viewport, &[(lesson(), Rect::new(0.0, -500.0, 800.0, 450.0))]);
        assert_eq!(rig.manager.mode(), DockMode::Floating);

        rig.manager
            .geometry_changed(viewport, &[(lesson(), Rect::new(0.0, -300.0, 800.0, 450.0))]);
        assert_eq!(rig.manager.mode(), DockMode::Docked);
        assert_eq!(rig.host.dom.borrow().parent, Some(lesson()));
    }

    #[test]
    fn test_only_one_live_target_across_navigation() {
        let mut rig = docked_and_playing();
        let sequence = [
            Route::Notes,
            Route::Lesson,
            Route::MyCourses,
            Route::Landing,
            Route::Lesson,
            Route::Lesson,
            Route::CourseOverview,
        ];
        for route in sequence {
            if route == Route::Lesson {
                enter_lesson(&mut rig);
            } else if rig.manager.route() == Route::Lesson {
                leave_lesson(&mut rig, route);
            } else {
                rig.manager.navigate(route);
            }
            let dom = rig.host.dom.borrow();
            assert_eq!(dom.parent.as_ref(), rig.manager.target().mount.as_ref());
            assert_eq!(dom.generation, 0);
        }
    }

    #[test]
    fn test_anchor_removed_before_render_reresolves() {
        let mut rig = docked_and_playing();
        leave_lesson(&mut rig, Route::Notes);
        // Registry says attached, the host disagrees: navigation race.
        rig.manager.navigate(Route::Lesson);
        rig.manager.anchor_mounted(lesson());
        assert_eq!(rig.manager.mode(), DockMode::Floating);
        assert_eq!(rig.host.dom.borrow().parent, Some(MountPoint::floating()));
    }

    #[test]
    fn test_mount_missing_report_reresolves() {
        let mut rig = docked_and_playing();
        rig.host.dom.borrow_mut().attached.remove(&lesson());
        rig.manager.mount_missing(&lesson());
        assert_eq!(rig.manager.mode(), DockMode::Floating);
    }

    #[test]
    fn test_overlay_click_toggles_and_drag_release_does_not() {
        let mut rig = docked_and_playing();
        leave_lesson(&mut rig, Route::Notes);

        // Pure click: pause requested exactly once.
        assert!(rig.manager.overlay_pointer_down(OverlayRegion::Surface, Point::new(1000.0, 600.0)));
        rig.manager.overlay_pointer_move(Point::new(998.0, 599.0));
        assert_eq!(rig.manager.overlay_pointer_up(), PointerRelease::Click);
        assert!(rig.manager.overlay_surface_click());
        assert_eq!(rig.calls.borrow().iter().filter(|c| **c == Call::Pause).count(), 1);
        rig.manager.handle_media_event(rig.media, MediaEvent::Pause);

        // Drag: moves the overlay and swallows the click.
        let before = rig.manager.floating_position();
        rig.manager.overlay_pointer_down(OverlayRegion::Surface, Point::new(1000.0, 600.0));
        assert!(rig.manager.overlay_pointer_move(Point::new(800.0, 500.0)).is_some());
        assert_eq!(rig.manager.overlay().phase(), DragPhase::Dragging);
        assert_eq!(rig.manager.overlay_pointer_up(), PointerRelease::DragEnded);
        assert!(!rig.manager.overlay_surface_click());
        assert_ne!(rig.manager.floating_position(), before);
        assert_eq!(rig.calls.borrow().iter().filter(|c| **c == Call::Play).count(), 1);
    }

    #[test]
    fn test_pointer_down_ignored_while_docked() {
        let mut rig = docked_and_playing();
        assert!(!rig.manager.overlay_pointer_down(OverlayRegion::Surface, Point::new(10.0, 10.0)));
    }

    #[test]
    fn test_close_hides_and_disables_mutators() {
        let mut rig = docked_and_playing();
        leave_lesson(&mut rig, Route::Notes);
        rig.manager.overlay_action(OverlayAction::Close);

        assert_eq!(rig.manager.mode(), DockMode::Hidden);
        assert!(!rig.manager.has_session());
        assert_eq!(rig.manager.placement(), &SurfacePlacement::Absent);
        assert!(!rig.host.dom.borrow().alive);

        let recorded = rig.calls.borrow().len();
        rig.manager.toggle_play();
        rig.manager.seek_to(10.0);
        rig.manager.toggle_mute();
        rig.manager.close_video();
        assert_eq!(rig.calls.borrow().len(), recorded);
    }

    #[test]
    fn test_restore_returns_to_lesson_and_requests_scroll() {
        let mut rig = docked_and_playing();
        leave_lesson(&mut rig, Route::Notes);
        rig.host.dom.borrow_mut().attached.insert(lesson());
        rig.manager.overlay_action(OverlayAction::Restore);
        assert_eq!(rig.manager.route(), Route::Lesson);
        rig.manager.anchor_mounted(lesson());
        assert_eq!(rig.manager.mode(), DockMode::Docked);
        assert_eq!(rig.manager.take_scroll_request(), Some(lesson()));
        assert_eq!(rig.manager.take_scroll_request(), None);
    }

    #[test]
    fn test_restore_after_scroll_past_redocks_in_place() {
        let mut rig = docked_and_playing();
        rig.manager.geometry_changed(
            Size::new(1280.0, 720.0),
            &[(lesson(), Rect::new(0.0, -500.0, 800.0, 450.0))],
        );
        assert_eq!(rig.manager.mode(), DockMode::Floating);
        rig.manager.restore();
        assert_eq!(rig.manager.mode(), DockMode::Docked);
    }

    #[test]
    fn test_viewport_shrink_reclamps_overlay() {
        let mut rig = docked_and_playing();
        leave_lesson(&mut rig, Route::Notes);
        rig.manager.geometry_changed(Size::new(800.0, 600.0), &[]);
        assert_eq!(
            rig.manager.floating_position(),
            Some(FloatingPosition::new(464.0, 404.0))
        );
    }

    #[test]
    fn test_seek_by_uses_current_time() {
        let mut rig = docked_and_playing();
        rig.manager.seek_by(-5.0);
        assert_eq!(rig.manager.playback().current_time_seconds, 37.0);
        assert_eq!(rig.calls.borrow().last(), Some(&Call::Seek(37.0)));
    }

    fn open_while_offline() -> (MediaSurfaceManager<FakeHost>, FakeHost) {
        let host = FakeHost::new();
        host.dom.borrow_mut().attached.insert(lesson());
        let mut manager = MediaSurfaceManager::new(&settings(), host.clone());
        manager.navigate(Route::Lesson);
        manager.anchor_mounted(lesson());

        host.dom.borrow_mut().offline = true;
        let (fake, _calls) = FakeMedia::new();
        manager.open_session(Box::new(fake));
        assert!(manager.has_session());
        assert_eq!(manager.mode(), DockMode::Hidden);
        host.dom.borrow_mut().offline = false;
        (manager, host)
    }

    #[test]
    fn test_failed_relocation_retried_on_next_geometry_sample() {
        let (mut manager, host) = open_while_offline();
        manager.geometry_changed(Size::new(1280.0, 720.0), &[]);
        assert_eq!(manager.mode(), DockMode::Docked);
        assert_eq!(host.dom.borrow().parent, Some(lesson()));
    }

    #[test]
    fn test_reconnected_host_replays_placement() {
        let (mut manager, host) = open_while_offline();
        manager.reconnected();
        assert_eq!(manager.target(), &DockTarget::docked(lesson()));
        assert_eq!(host.dom.borrow().generation, 0);
    }

    #[test]
    fn test_initial_route_comes_from_settings() {
        let settings = PlayerSettings {
            last_path: "/notes".to_string(),
            ..settings()
        };
        let manager = MediaSurfaceManager::new(&settings, FakeHost::new());
        assert_eq!(manager.route(), Route::Notes);
    }
}
