use dioxus::prelude::*;

use crate::app::{close_player, restore_player, PlayerHandle, UiState};
use crate::constants::*;
use crate::core::geometry::Point;
use crate::core::overlay::OverlayRegion;
use crate::core::slot::DockMode;

/// Picture-in-picture frame. Always present in the document so its mount point
/// stays live; hidden unless the surface is floating.
#[component]
pub fn FloatingOverlay(width: f64, height: f64) -> Element {
    let mut manager = use_context::<PlayerHandle>();
    let ui = use_context::<UiState>();

    let (floating, position) = {
        let player = manager.read();
        (player.mode() == DockMode::Floating, player.floating_position())
    };
    let (x, y) = position.map(|p| (p.x, p.y)).unwrap_or((0.0, 0.0));
    let display = if floating { "block" } else { "none" };

    let mut press = move |region: OverlayRegion, e: MouseEvent| {
        let coords = e.client_coordinates();
        if manager.write().overlay_pointer_down(region, Point::new(coords.x, coords.y)) {
            e.prevent_default();
        }
    };

    rsx! {
        div {
            class: "floating-overlay",
            style: "
                position: fixed; left: {x}px; top: {y}px;
                width: {width}px; height: {height}px; display: {display};
                z-index: 9000; overflow: hidden; border-radius: 8px;
                background-color: #000; border: 1px solid {BORDER_STRONG};
                box-shadow: 0 8px 24px rgba(0,0,0,0.45);
                cursor: grab;
            ",
            onmousedown: move |e| press(OverlayRegion::Surface, e),

            div {
                id: "{FLOATING_MOUNT_ID}",
                style: "position: absolute; inset: 0;",
            }

            div {
                class: "overlay-chrome",
                style: "
                    position: absolute; top: 0; left: 0; right: 0; height: 28px;
                    display: flex; align-items: center; justify-content: flex-end; gap: 4px; padding: 0 6px;
                    background: linear-gradient(rgba(0,0,0,0.7), transparent);
                ",
                button {
                    class: "collapse-btn",
                    title: "Back to lesson",
                    style: "background: transparent; border: none; color: {TEXT_PRIMARY}; cursor: pointer; font-size: 12px; padding: 2px 6px; border-radius: 4px;",
                    onmousedown: move |e| {
                        e.stop_propagation();
                        press(OverlayRegion::Restore, e);
                    },
                    onclick: move |e| {
                        e.stop_propagation();
                        restore_player(manager);
                    },
                    "⤢"
                }
                button {
                    class: "collapse-btn",
                    title: "Close",
                    style: "background: transparent; border: none; color: {TEXT_PRIMARY}; cursor: pointer; font-size: 12px; padding: 2px 6px; border-radius: 4px;",
                    onmousedown: move |e| {
                        e.stop_propagation();
                        press(OverlayRegion::Close, e);
                    },
                    onclick: move |e| {
                        e.stop_propagation();
                        close_player(manager, ui);
                    },
                    "✕"
                }
            }
        }
    }
}
