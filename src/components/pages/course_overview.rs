use dioxus::prelude::*;

use super::{card_style, primary_button_style, PageHeader, COURSES};
use crate::app::{start_lesson, PlayerHandle, UiState};
use crate::constants::*;

const MODULES: [(&str, &str, bool); 4] = [
    ("1. Moves and copies", "12 min", true),
    ("2. Shared and mutable borrows", "18 min", false),
    ("3. Lifetimes in signatures", "15 min", false),
    ("4. Interior mutability", "21 min", false),
];

#[component]
pub fn CourseOverviewPage() -> Element {
    let manager = use_context::<PlayerHandle>();
    let ui = use_context::<UiState>();
    let course = &COURSES[0];
    let button_style = primary_button_style();
    let card = card_style();

    rsx! {
        PageHeader {
            title: course.title.to_string(),
            subtitle: format!("with {} · {}% complete", course.instructor, course.progress_percent),
        }
        div {
            style: "{card} margin-bottom: 16px;",
            p { style: "font-size: 13px; color: {TEXT_SECONDARY}; margin: 0 0 12px;", "{course.summary}" }
            button {
                style: "{button_style}",
                onclick: move |_| start_lesson(manager, ui),
                "Start lesson"
            }
        }
        div {
            style: "{card}",
            for (title, length, current) in MODULES {
                div {
                    key: "{title}",
                    style: "display: flex; justify-content: space-between; padding: 8px 0; border-bottom: 1px solid {BORDER_SUBTLE}; font-size: 13px;",
                    span { style: "color: {module_color(current)};", "{title}" }
                    span { style: "color: {TEXT_MUTED};", "{length}" }
                }
            }
        }
    }
}

fn module_color(current: bool) -> &'static str {
    if current {
        ACCENT_PRIMARY
    } else {
        TEXT_PRIMARY
    }
}
