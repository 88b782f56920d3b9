use dioxus::prelude::*;
use crate::constants::*;
use crate::state::Route;

#[component]
pub fn TitleBar(route: Route, on_navigate: EventHandler<Route>) -> Element {
    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                height: {TITLE_BAR_HEIGHT}px; padding: 0 16px;
                background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                user-select: none;
            ",
            div {
                style: "display: flex; align-items: center; gap: 20px;",
                span { style: "font-size: 13px; font-weight: 600; color: {TEXT_SECONDARY};", "Lesson Player" }
                for target in Route::ALL {
                    button {
                        key: "{target.path()}",
                        class: "collapse-btn",
                        style: "
                            background: {nav_background(target == route)}; border: none; color: {TEXT_PRIMARY};
                            font-size: 12px; cursor: pointer; padding: 4px 8px; border-radius: 4px;
                        ",
                        onclick: move |_| on_navigate.call(target),
                        "{target.label()}"
                    }
                }
            }
            span { style: "font-size: 12px; color: {TEXT_MUTED}; font-family: 'SF Mono', Consolas, monospace;", "{route.path()}" }
        }
    }
}

fn nav_background(active: bool) -> &'static str {
    if active {
        BG_HOVER
    } else {
        "transparent"
    }
}
