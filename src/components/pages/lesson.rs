//! Lesson page: the docking container for the video, the transcript and the
//! note-taking box. The transcript is long enough that the video scrolls out of
//! view, which floats it.

use dioxus::prelude::*;

use super::{card_style, primary_button_style, secondary_button_style, PageHeader};
use crate::app::{restore_player, start_lesson, PlayerHandle, UiState};
use crate::components::DockAnchor;
use crate::constants::*;
use crate::core::slot::DockMode;
use crate::state::NotesState;
use crate::utils::format_timecode;

const TRANSCRIPT: [(f64, &str); 12] = [
    (0.0, "Welcome back. Today we look at what actually happens when a value moves."),
    (14.0, "A move transfers ownership; the old binding can no longer be used."),
    (31.0, "Types that are Copy are duplicated instead, so both bindings stay valid."),
    (52.0, "Function arguments follow the same rule: passing a String moves it."),
    (75.0, "Returning a value moves it back out to the caller."),
    (98.0, "Clone is explicit. If you see clone in a hot loop, ask whether a borrow would do."),
    (126.0, "Structs move as a whole unless you destructure them."),
    (149.0, "Partial moves leave the struct unusable, but the remaining fields are still yours."),
    (177.0, "Closures capture by reference unless you write move."),
    (203.0, "Threads need owned data, which is why spawn takes a move closure."),
    (236.0, "Next lesson: shared and mutable borrows."),
    (260.0, "Before you go, take a note of the one rule you want to remember."),
];

#[component]
pub fn LessonPage() -> Element {
    let mut manager = use_context::<PlayerHandle>();
    let mut ui = use_context::<UiState>();
    let mut notes = use_context::<Signal<NotesState>>();
    let mut draft = use_signal(String::new);

    let (mode, has_session, current_time) = {
        let player = manager.read();
        (player.mode(), player.has_session(), player.playback().current_time_seconds)
    };
    let lesson_notes = notes.read().sorted();
    let card = card_style();
    let primary = primary_button_style();
    let secondary = secondary_button_style();
    let stamp = format_timecode(current_time);

    rsx! {
        PageHeader {
            title: "Moves and copies",
            subtitle: "Rust Ownership in Practice · Lesson 1",
        }

        div {
            style: "position: relative; width: 100%; aspect-ratio: 16 / 9; background-color: {BG_DEEPEST}; border: 1px solid {BORDER_DEFAULT}; border-radius: 8px; overflow: hidden; margin-bottom: 20px;",
            div {
                style: "position: absolute; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 10px; color: {TEXT_MUTED}; font-size: 13px;",
                if !has_session {
                    button {
                        style: "{primary}",
                        onclick: move |_| start_lesson(manager, ui),
                        "Start lesson"
                    }
                } else if mode == DockMode::Floating {
                    span { "Playing in the mini player" }
                    button {
                        style: "{secondary}",
                        onclick: move |_| restore_player(manager),
                        "Bring it back"
                    }
                }
            }
            DockAnchor { id: LESSON_DOCK_ID.to_string() }
        }

        div {
            style: "display: grid; grid-template-columns: 2fr 1fr; gap: 16px; align-items: start;",

            div {
                style: "{card}",
                h2 { style: "font-size: 14px; margin: 0 0 12px;", "Transcript" }
                for (at, line) in TRANSCRIPT {
                    div {
                        key: "{at}",
                        style: "display: flex; gap: 12px; padding: 10px 0; border-bottom: 1px solid {BORDER_SUBTLE}; font-size: 13px; line-height: 1.6;",
                        button {
                            class: "collapse-btn",
                            style: "background: transparent; border: none; color: {ACCENT_PRIMARY}; cursor: pointer; font-family: 'SF Mono', Consolas, monospace; font-size: 12px; padding: 0;",
                            onclick: move |_| manager.write().seek_to(at),
                            "{format_timecode(at)}"
                        }
                        span { style: "color: {TEXT_SECONDARY};", "{line}" }
                    }
                }
            }

            div {
                style: "{card}",
                h2 { style: "font-size: 14px; margin: 0 0 12px;", "Notes" }
                textarea {
                    value: "{draft}",
                    placeholder: "Note at {stamp}",
                    rows: "4",
                    style: "width: 100%; resize: vertical; padding: 8px; font-size: 12px; background-color: {BG_ELEVATED}; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_DEFAULT}; border-radius: 6px; outline: none; user-select: text;",
                    oninput: move |e| draft.set(e.value()),
                    onfocus: move |_| ui.input_focused.set(true),
                    onblur: move |_| ui.input_focused.set(false),
                }
                button {
                    style: "{primary} margin-top: 8px; width: 100%;",
                    disabled: draft.read().trim().is_empty(),
                    onclick: move |_| {
                        let at = manager.read().playback().current_time_seconds;
                        if notes.write().add(&draft.read(), at).is_some() {
                            draft.set(String::new());
                        }
                    },
                    "Add note at {stamp}"
                }
                for note in lesson_notes {
                    div {
                        key: "{note.id}",
                        style: "margin-top: 10px; padding-top: 10px; border-top: 1px solid {BORDER_SUBTLE}; font-size: 12px;",
                        button {
                            class: "collapse-btn",
                            style: "background: transparent; border: none; color: {ACCENT_PRIMARY}; cursor: pointer; font-family: 'SF Mono', Consolas, monospace; font-size: 11px; padding: 0; margin-bottom: 4px;",
                            onclick: move |_| manager.write().seek_to(note.timestamp_seconds),
                            "{note.timecode()}"
                        }
                        div { style: "color: {TEXT_SECONDARY}; white-space: pre-wrap;", "{note.content}" }
                    }
                }
            }
        }
    }
}
