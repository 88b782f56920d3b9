//! Root application component
//!
//! Owns the media surface manager and the webview bridges, renders the
//! navigation chrome, the current page, the parking container that hosts the
//! lesson video between moves, and the floating overlay.

use std::time::Duration;

use dioxus::prelude::*;

use crate::components::{FloatingOverlay, MediaSurface, PageView, StatusBar, TitleBar};
use crate::constants::*;
use crate::core::dom_bridge::{DomSurfaceHost, GeometryReport, PortalReply};
use crate::core::geometry::Point;
use crate::core::overlay::{DragPhase, OverlayAction, PointerRelease};
use crate::core::paths::settings_path;
use crate::core::slot::{DockMode, MountPoint};
use crate::core::surface_manager::MediaSurfaceManager;
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::state::{NotesState, PlayerSettings, Route};

/// The one surface manager of the session, shared with every view.
pub type PlayerHandle = Signal<MediaSurfaceManager<DomSurfaceHost>>;

/// View-level flags shared through context.
#[derive(Clone, Copy)]
pub struct UiState {
    /// The lesson video element is (or should be) mounted.
    pub player_open: Signal<bool>,
    /// A text field has focus; hotkeys stay quiet.
    pub input_focused: Signal<bool>,
}

/// Open the lesson on the lesson page, creating the video if needed.
pub fn start_lesson(mut manager: PlayerHandle, mut ui: UiState) {
    if !*ui.player_open.peek() {
        ui.player_open.set(true);
    }
    manager.write().navigate(Route::Lesson);
}

/// End the playback session and drop the video element.
pub fn close_player(mut manager: PlayerHandle, mut ui: UiState) {
    manager.write().close_video();
    ui.player_open.set(false);
}

/// Go back to the docked view and scroll its container into view.
pub fn restore_player(mut manager: PlayerHandle) {
    let mut player = manager.write();
    player.overlay_action(OverlayAction::Restore);
    if let Some(mount) = player.take_scroll_request() {
        if let Err(err) = player.host().scroll_into_view(&mount) {
            tracing::warn!(%mount, error = %err, "scroll request not delivered");
        }
    }
}

/// Remember the page for the next launch.
fn remember_route(settings: &PlayerSettings, route: Route) {
    let path = settings_path();
    let mut next = settings.clone();
    next.last_path = route.path().to_string();
    if let Err(err) = next.save(&path) {
        tracing::warn!(path = %path.display(), error = %err, "failed to save last route");
    }
}

/// Main application component
#[component]
pub fn App() -> Element {
    let settings = use_context::<PlayerSettings>();

    let mut manager: PlayerHandle = use_context_provider(|| {
        Signal::new(MediaSurfaceManager::new(&settings, DomSurfaceHost::new()))
    });
    let _notes = use_context_provider(|| Signal::new(NotesState::new()));
    let ui = use_context_provider(|| UiState {
        player_open: Signal::new(false),
        input_focused: Signal::new(false),
    });

    let mut portal_eval = use_signal(|| None::<document::Eval>);
    let mut geometry_eval = use_signal(|| None::<document::Eval>);

    use_effect(move || {
        if portal_eval().is_some() {
            return;
        }
        let eval = document::eval(PORTAL_BRIDGE_SCRIPT);
        {
            let mut player = manager.write();
            player.host_mut().connect(eval.clone());
            player.reconnected();
        }
        portal_eval.set(Some(eval));
    });

    use_effect(move || {
        if geometry_eval().is_some() {
            return;
        }
        geometry_eval.set(Some(document::eval(GEOMETRY_BRIDGE_SCRIPT)));
    });

    use_future(move || {
        let mut manager = manager.clone();
        let mut portal_eval = portal_eval;
        async move {
            loop {
                let Some(eval) = portal_eval() else {
                    tokio::time::sleep(Duration::from_millis(BRIDGE_RETRY_MS)).await;
                    continue;
                };
                let mut eval = eval;
                loop {
                    match eval.recv::<PortalReply>().await {
                        Ok(PortalReply::MountMissing { mount }) => {
                            manager.write().mount_missing(&MountPoint::new(mount));
                        }
                        Err(err) => {
                            tracing::debug!(error = %err, "portal bridge closed, reconnecting");
                            portal_eval.set(None);
                            break;
                        }
                    }
                }
                tokio::time::sleep(Duration::from_millis(BRIDGE_RETRY_MS)).await;
            }
        }
    });

    use_future(move || {
        let mut manager = manager.clone();
        let mut geometry_eval = geometry_eval;
        async move {
            loop {
                let Some(eval) = geometry_eval() else {
                    tokio::time::sleep(Duration::from_millis(BRIDGE_RETRY_MS)).await;
                    continue;
                };
                let mut eval = eval;
                loop {
                    match eval.recv::<GeometryReport>().await {
                        Ok(report) => {
                            manager
                                .write()
                                .geometry_changed(report.viewport(), &report.anchors());
                        }
                        Err(err) => {
                            tracing::debug!(error = %err, "geometry bridge closed, reconnecting");
                            geometry_eval.set(None);
                            break;
                        }
                    }
                }
                tokio::time::sleep(Duration::from_millis(BRIDGE_RETRY_MS)).await;
            }
        }
    });

    let current_route = use_memo(move || manager.read().route());
    let mut saved_path = use_signal(|| settings.last_path.clone());
    let persisted = settings.clone();
    use_effect(move || {
        let route = current_route();
        if *saved_path.peek() == route.path() {
            return;
        }
        remember_route(&persisted, route);
        saved_path.set(route.path().to_string());
    });

    let (route, mode, playback, dragging) = {
        let player = manager.read();
        (
            player.route(),
            player.mode(),
            player.playback(),
            player.overlay().phase() != DragPhase::Idle,
        )
    };
    let drag_cursor = if dragging { "grabbing" } else { "default" };
    let user_select_style = if dragging { "none" } else { "auto" };
    let player_open = (ui.player_open)();

    rsx! {
        style {
            r#"
            *, *::before, *::after {{ box-sizing: border-box; }}
            html, body {{ margin: 0; padding: 0; overflow: hidden; background-color: {BG_BASE}; }}
            body {{ -webkit-font-smoothing: antialiased; }}
            ::-webkit-scrollbar {{ width: 6px; height: 6px; }}
            ::-webkit-scrollbar-track {{ background: transparent; }}
            ::-webkit-scrollbar-thumb {{ background: {BORDER_DEFAULT}; border-radius: 3px; }}
            ::-webkit-scrollbar-thumb:hover {{ background: {BORDER_STRONG}; }}
            .collapse-btn {{ opacity: 0.7; transition: opacity 0.15s ease, background-color 0.15s ease; }}
            .collapse-btn:hover {{ opacity: 1; background-color: {BG_HOVER} !important; }}
            .card {{ transition: border-color 0.15s ease; }}
            .card:hover {{ border-color: {BORDER_STRONG} !important; }}
            .overlay-chrome {{ opacity: 0; transition: opacity 0.15s ease; }}
            .floating-overlay:hover .overlay-chrome {{ opacity: 1; }}
            "#
        }

        div {
            class: "app-container",
            style: "
                display: flex; flex-direction: column;
                width: 100vw; height: 100vh;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
                overflow: hidden; position: fixed; top: 0; left: 0;
                user-select: {user_select_style};
                cursor: {drag_cursor};
            ",

            onmousemove: move |e| {
                if !dragging {
                    return;
                }
                e.prevent_default();
                let coords = e.client_coordinates();
                manager.write().overlay_pointer_move(Point::new(coords.x, coords.y));
            },
            onmouseup: move |_| {
                if manager.write().overlay_pointer_up() == PointerRelease::DragEnded {
                    tracing::debug!("overlay drag finished");
                }
            },
            onpointercancel: move |_| manager.write().overlay_pointer_cancel(),
            tabindex: "0",
            onkeydown: move |e: KeyboardEvent| {
                let hotkey_context = {
                    let player = manager.read();
                    HotkeyContext {
                        has_session: player.has_session(),
                        floating: player.mode() == DockMode::Floating,
                        input_focused: (ui.input_focused)(),
                    }
                };

                let modifiers = e.modifiers();
                let shift = modifiers.shift();
                let ctrl = modifiers.ctrl();
                let alt = modifiers.alt();
                let meta = modifiers.meta();

                match handle_hotkey(&e.key(), shift, ctrl, alt, meta, &hotkey_context) {
                    HotkeyResult::Action(action) => {
                        e.prevent_default();
                        match action {
                            HotkeyAction::PlayPause => manager.write().toggle_play(),
                            HotkeyAction::ToggleMute => manager.write().toggle_mute(),
                            HotkeyAction::SeekBackward => manager.write().seek_by(-SEEK_STEP_SECONDS),
                            HotkeyAction::SeekForward => manager.write().seek_by(SEEK_STEP_SECONDS),
                            HotkeyAction::ClosePlayer => close_player(manager, ui),
                        }
                    }
                    HotkeyResult::NoMatch | HotkeyResult::Suppressed => {}
                }
            },

            TitleBar {
                route: route,
                on_navigate: move |next: Route| manager.write().navigate(next),
            }

            div {
                id: "{CONTENT_SCROLL_ID}",
                style: "flex: 1; overflow-y: auto; overflow-x: hidden;",
                PageView { route: route }
            }

            StatusBar {
                mode: mode,
                current_seconds: playback.current_time_seconds,
                duration_seconds: playback.duration_seconds,
                is_playing: playback.is_playing,
                is_muted: playback.is_muted,
            }

            // Off-screen home of the surface between moves.
            div {
                id: "{PARKING_MOUNT_ID}",
                style: "
                    position: fixed; left: -10000px; top: 0;
                    width: {settings.overlay_width}px; height: {settings.overlay_height}px;
                    overflow: hidden; pointer-events: none;
                ",
                if player_open {
                    MediaSurface { src: settings.video_src.clone() }
                }
            }

            FloatingOverlay {
                width: settings.overlay_width,
                height: settings.overlay_height,
            }
        }
    }
}
