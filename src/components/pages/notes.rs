use dioxus::prelude::*;

use super::{card_style, secondary_button_style, PageHeader};
use crate::app::PlayerHandle;
use crate::constants::*;
use crate::state::NotesState;

#[component]
pub fn NotesPage() -> Element {
    let mut manager = use_context::<PlayerHandle>();
    let mut notes = use_context::<Signal<NotesState>>();
    let mut copied = use_signal(|| false);

    let has_session = manager.read().has_session();
    let (empty, count, sorted, markdown) = {
        let notes = notes.read();
        (notes.is_empty(), notes.len(), notes.sorted(), notes.export_markdown())
    };
    let subtitle = match count {
        0 => "Click a timestamp to jump the lesson video there.".to_string(),
        1 => "1 note. Click its timestamp to jump the lesson video there.".to_string(),
        n => format!("{n} notes. Click a timestamp to jump the lesson video there."),
    };
    let card = card_style();
    let secondary = secondary_button_style();

    rsx! {
        PageHeader {
            title: "Notes",
            subtitle: subtitle,
        }

        if empty {
            div { style: "{card} color: {TEXT_MUTED}; font-size: 13px;", "No notes yet. Add one from the lesson page." }
        } else {
            div {
                style: "{card} margin-bottom: 16px;",
                if !has_session {
                    p { style: "font-size: 12px; color: {TEXT_DIM}; margin: 0 0 8px;", "Start the lesson to jump to a timestamp." }
                }
                for note in sorted {
                    div {
                        key: "{note.id}",
                        style: "display: flex; gap: 12px; align-items: baseline; padding: 10px 0; border-bottom: 1px solid {BORDER_SUBTLE}; font-size: 13px;",
                        button {
                            class: "collapse-btn",
                            style: "background: transparent; border: none; color: {ACCENT_PRIMARY}; cursor: pointer; font-family: 'SF Mono', Consolas, monospace; font-size: 12px; padding: 0;",
                            onclick: move |_| manager.write().seek_to(note.timestamp_seconds),
                            "{note.timecode()}"
                        }
                        span { style: "flex: 1; color: {TEXT_SECONDARY}; white-space: pre-wrap;", "{note.content}" }
                        span { style: "font-size: 11px; color: {TEXT_DIM};", "{note.created_label()}" }
                        button {
                            class: "collapse-btn",
                            style: "background: transparent; border: none; color: {ACCENT_WARNING}; cursor: pointer; font-size: 11px;",
                            onclick: move |_| {
                                notes.write().delete(note.id);
                            },
                            "Delete"
                        }
                    }
                }
            }

            div {
                style: "{card}",
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                    h2 { style: "font-size: 14px; margin: 0;", "Markdown export" }
                    button {
                        style: "{secondary}",
                        onclick: {
                            let markdown = markdown.clone();
                            move |_| match serde_json::to_string(&markdown) {
                                Ok(encoded) => {
                                    let _ = document::eval(&format!("navigator.clipboard.writeText({encoded});"));
                                    copied.set(true);
                                }
                                Err(err) => tracing::warn!(error = %err, "failed to encode notes export"),
                            }
                        },
                        if copied() { "Copied" } else { "Copy" }
                    }
                }
                pre {
                    style: "margin: 0; padding: 12px; background-color: {BG_DEEPEST}; border-radius: 6px; font-size: 12px; color: {TEXT_SECONDARY}; white-space: pre-wrap; user-select: text;",
                    "{markdown}"
                }
            }
        }
    }
}
