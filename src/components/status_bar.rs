use dioxus::prelude::*;
use crate::constants::*;
use crate::core::slot::DockMode;
use crate::utils::format_progress;

#[component]
pub fn StatusBar(
    mode: DockMode,
    current_seconds: f64,
    duration_seconds: f64,
    is_playing: bool,
    is_muted: bool,
) -> Element {
    let mode_color = match mode {
        DockMode::Docked => ACCENT_SUCCESS,
        DockMode::Floating => ACCENT_PRIMARY,
        DockMode::Hidden => TEXT_DIM,
    };
    let state_label = if is_playing { "Playing" } else { "Paused" };
    let progress = format_progress(current_seconds, duration_seconds);

    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; height: {STATUS_BAR_HEIGHT}px; padding: 0 14px; background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_DEFAULT}; font-size: 11px; color: {TEXT_DIM};",
            span { style: "color: {mode_color};", "{mode.label()}" }
            div {
                style: "display: flex; gap: 16px; font-family: 'SF Mono', Consolas, monospace;",
                if mode != DockMode::Hidden {
                    span { "{state_label}" }
                }
                if is_muted {
                    span { "Muted" }
                }
                span { "{progress}" }
            }
        }
    }
}
