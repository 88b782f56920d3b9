//! The lesson video and its control bar.
//!
//! Rendered once per session inside the parking container. The portal bridge
//! moves this subtree between the lesson page and the floating overlay; the
//! component itself never re-renders into a different parent.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::app::PlayerHandle;
use crate::constants::*;
use crate::core::dom_bridge::{DomMediaElement, MediaEventMessage};
use crate::core::geometry::Point;
use crate::core::overlay::OverlayRegion;
use crate::core::playback::{MediaElement, MediaElementId};
use crate::core::slot::DockMode;
use crate::utils::{format_progress, parse_f64_input};

#[component]
pub fn MediaSurface(src: String) -> Element {
    let mut manager = use_context::<PlayerHandle>();
    let media_eval = use_hook(|| document::eval(MEDIA_BRIDGE_SCRIPT));
    let bound = use_hook(|| Rc::new(Cell::new(None::<MediaElementId>)));

    let events_eval = media_eval.clone();
    use_future(move || {
        let mut eval = events_eval.clone();
        async move {
            loop {
                match eval.recv::<MediaEventMessage>().await {
                    Ok(message) => {
                        let (source, event) = message.into_event();
                        manager.write().handle_media_event(source, event);
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "media bridge closed");
                        break;
                    }
                }
            }
        }
    });

    use_drop({
        let bound = bound.clone();
        move || {
            if let Some(id) = bound.get() {
                manager.write().surface_unmounted(id);
            }
        }
    });

    let (state, mode) = {
        let player = manager.read();
        (player.playback(), player.mode())
    };
    let play_label = if state.is_playing { "❚❚" } else { "▶" };
    let mute_label = if state.is_muted { "Unmute" } else { "Mute" };
    let progress = format_progress(state.current_time_seconds, state.duration_seconds);
    let scrub_max = state.duration_seconds.max(0.0);
    let scrub_value = state.current_time_seconds;

    // Interactive controls are tagged with their region and never arm a drag.
    let mut press = move |region: OverlayRegion, e: MouseEvent| {
        let coords = e.client_coordinates();
        let armed = manager.write().overlay_pointer_down(region, Point::new(coords.x, coords.y));
        if armed {
            e.prevent_default();
        }
    };

    rsx! {
        div {
            id: "{MEDIA_SURFACE_ID}",
            style: "
                position: relative; width: 100%; height: 100%;
                background-color: #000; overflow: hidden; pointer-events: auto;
            ",
            onmousedown: move |e| press(OverlayRegion::Surface, e),
            onclick: move |_| {
                let mut player = manager.write();
                if player.mode() == DockMode::Floating {
                    player.overlay_surface_click();
                } else {
                    player.toggle_play();
                }
            },

            video {
                id: "{MEDIA_VIDEO_ID}",
                src: "{src}",
                preload: "metadata",
                playsinline: true,
                style: "width: 100%; height: 100%; object-fit: contain; display: block;",
                onmounted: {
                    let bound = bound.clone();
                    let eval = media_eval.clone();
                    move |_| {
                        if bound.get().is_some() {
                            return;
                        }
                        let element = DomMediaElement::new(eval.clone());
                        bound.set(Some(element.id()));
                        manager.write().open_session(Box::new(element));
                    }
                },
            }

            div {
                style: "
                    position: absolute; left: 0; right: 0; bottom: 0;
                    display: flex; align-items: center; gap: 8px; padding: 6px 8px;
                    background: linear-gradient(transparent, rgba(0,0,0,0.75));
                    font-size: 11px; color: {TEXT_PRIMARY};
                ",
                button {
                    class: "collapse-btn",
                    style: "background: transparent; border: none; color: {TEXT_PRIMARY}; cursor: pointer; font-size: 12px; width: 24px;",
                    onmousedown: move |e| {
                        e.stop_propagation();
                        press(OverlayRegion::PlayPause, e);
                    },
                    onclick: move |e| {
                        e.stop_propagation();
                        manager.write().toggle_play();
                    },
                    "{play_label}"
                }
                input {
                    r#type: "range",
                    min: "0",
                    max: "{scrub_max}",
                    step: "0.1",
                    value: "{scrub_value}",
                    disabled: scrub_max <= 0.0,
                    style: "flex: 1; min-width: 40px; accent-color: {ACCENT_PRIMARY};",
                    onmousedown: move |e| {
                        e.stop_propagation();
                        press(OverlayRegion::Scrubber, e);
                    },
                    onclick: move |e| e.stop_propagation(),
                    oninput: move |e| {
                        let current = manager.read().playback().current_time_seconds;
                        let target = parse_f64_input(&e.value(), current);
                        manager.write().seek_to(target);
                    },
                }
                span { style: "font-family: 'SF Mono', Consolas, monospace; white-space: nowrap;", "{progress}" }
                button {
                    class: "collapse-btn",
                    style: "background: transparent; border: none; color: {TEXT_PRIMARY}; cursor: pointer; font-size: 11px;",
                    onmousedown: move |e| {
                        e.stop_propagation();
                        press(OverlayRegion::Mute, e);
                    },
                    onclick: move |e| {
                        e.stop_propagation();
                        manager.write().toggle_mute();
                    },
                    "{mute_label}"
                }
            }
        }
    }
}
