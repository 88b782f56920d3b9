use dioxus::prelude::*;

use super::{primary_button_style, PageHeader, COURSES};
use crate::app::PlayerHandle;
use crate::constants::*;
use crate::state::Route;

#[component]
pub fn LandingPage() -> Element {
    let mut manager = use_context::<PlayerHandle>();
    let button_style = primary_button_style();

    rsx! {
        PageHeader {
            title: "Learn at your own pace",
            subtitle: "Short video lessons, notes that jump back to the moment you took them.",
        }
        div {
            style: "display: flex; gap: 12px; margin-bottom: 32px;",
            button {
                style: "{button_style}",
                onclick: move |_| manager.write().navigate(Route::CourseOverview),
                "Go to dashboard"
            }
        }
        div {
            style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px;",
            for course in COURSES.iter() {
                div {
                    key: "{course.title}",
                    class: "card",
                    style: "background-color: {BG_SURFACE}; border: 1px solid {BORDER_SUBTLE}; border-radius: 8px; padding: 14px;",
                    div { style: "font-size: 13px; font-weight: 600; margin-bottom: 6px;", "{course.title}" }
                    div { style: "font-size: 12px; color: {TEXT_MUTED};", "{course.summary}" }
                }
            }
        }
    }
}
