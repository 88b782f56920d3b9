//! Dashboard pages. Static content; every playback intent goes through the
//! shared surface manager.

mod course_overview;
mod landing;
mod lesson;
mod my_courses;
mod notes;
mod subscription;

use dioxus::prelude::*;

use crate::constants::*;
use crate::state::Route;

pub use course_overview::CourseOverviewPage;
pub use landing::LandingPage;
pub use lesson::LessonPage;
pub use my_courses::MyCoursesPage;
pub use notes::NotesPage;
pub use subscription::SubscriptionPage;

pub(crate) struct CourseInfo {
    pub title: &'static str,
    pub instructor: &'static str,
    pub summary: &'static str,
    pub progress_percent: u32,
}

pub(crate) const COURSES: [CourseInfo; 3] = [
    CourseInfo {
        title: "Rust Ownership in Practice",
        instructor: "M. Alvarez",
        summary: "Borrowing, lifetimes and moving data between threads without fighting the compiler.",
        progress_percent: 35,
    },
    CourseInfo {
        title: "Async Services with Tokio",
        instructor: "J. Okafor",
        summary: "Tasks, channels and graceful shutdown for network services.",
        progress_percent: 0,
    },
    CourseInfo {
        title: "Desktop Apps with Dioxus",
        instructor: "S. Lindqvist",
        summary: "Signals, components and talking to the webview from Rust.",
        progress_percent: 80,
    },
];

#[component]
pub fn PageView(route: Route) -> Element {
    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 24px 24px 64px;",
            {match route {
                Route::Landing => rsx! { LandingPage {} },
                Route::CourseOverview => rsx! { CourseOverviewPage {} },
                Route::Lesson => rsx! { LessonPage {} },
                Route::Notes => rsx! { NotesPage {} },
                Route::Subscription => rsx! { SubscriptionPage {} },
                Route::MyCourses => rsx! { MyCoursesPage {} },
            }}
        }
    }
}

#[component]
pub(crate) fn PageHeader(title: String, subtitle: String) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 20px;",
            h1 { style: "font-size: 22px; font-weight: 600; margin: 0 0 6px; color: {TEXT_PRIMARY};", "{title}" }
            p { style: "font-size: 13px; margin: 0; color: {TEXT_SECONDARY};", "{subtitle}" }
        }
    }
}

pub(crate) fn primary_button_style() -> String {
    format!(
        "background-color: {ACCENT_PRIMARY}; border: none; color: {TEXT_PRIMARY}; \
         font-size: 12px; font-weight: 600; cursor: pointer; padding: 8px 14px; border-radius: 6px;"
    )
}

pub(crate) fn secondary_button_style() -> String {
    format!(
        "background-color: {BG_ELEVATED}; border: 1px solid {BORDER_DEFAULT}; color: {TEXT_PRIMARY}; \
         font-size: 12px; cursor: pointer; padding: 6px 12px; border-radius: 6px;"
    )
}

pub(crate) fn card_style() -> String {
    format!(
        "background-color: {BG_SURFACE}; border: 1px solid {BORDER_SUBTLE}; border-radius: 8px; padding: 16px;"
    )
}
