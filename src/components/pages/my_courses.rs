use dioxus::prelude::*;

use super::{primary_button_style, PageHeader, COURSES};
use crate::app::{start_lesson, PlayerHandle, UiState};
use crate::constants::*;

#[component]
pub fn MyCoursesPage() -> Element {
    let manager = use_context::<PlayerHandle>();
    let ui = use_context::<UiState>();
    let button_style = primary_button_style();

    rsx! {
        PageHeader {
            title: "My courses",
            subtitle: "Pick up where you left off.",
        }
        div {
            style: "display: flex; flex-direction: column; gap: 12px;",
            for (index, course) in COURSES.iter().enumerate() {
                div {
                    key: "{course.title}",
                    class: "card",
                    style: "display: flex; align-items: center; gap: 16px; background-color: {BG_SURFACE}; border: 1px solid {BORDER_SUBTLE}; border-radius: 8px; padding: 14px;",
                    div {
                        style: "flex: 1;",
                        div { style: "font-size: 14px; font-weight: 600;", "{course.title}" }
                        div { style: "font-size: 12px; color: {TEXT_MUTED}; margin: 4px 0 8px;", "{course.instructor}" }
                        div {
                            style: "height: 4px; background-color: {BG_HOVER}; border-radius: 2px; overflow: hidden;",
                            div { style: "height: 100%; width: {course.progress_percent}%; background-color: {ACCENT_PRIMARY};" }
                        }
                    }
                    // Only the first course has a playable lesson.
                    if index == 0 {
                        button {
                            style: "{button_style}",
                            onclick: move |_| start_lesson(manager, ui),
                            "Continue"
                        }
                    } else {
                        span { style: "font-size: 12px; color: {TEXT_DIM};", "Coming soon" }
                    }
                }
            }
        }
    }
}
