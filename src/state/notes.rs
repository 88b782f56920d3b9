//! Timestamped lesson notes.
//!
//! Notes live in memory for the session. Each one carries the playback time it
//! was taken at so clicking it can seek back there.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::format_timecode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub content: String,
    /// Playback position in seconds when the note was taken
    pub timestamp_seconds: f64,
    pub created_at: DateTime<Utc>,
}

impl Note {
    pub fn timecode(&self) -> String {
        format_timecode(self.timestamp_seconds)
    }

    /// Local wall-clock time the note was taken, `HH:MM`.
    pub fn created_label(&self) -> String {
        self.created_at
            .with_timezone(&chrono::Local)
            .format("%H:%M")
            .to_string()
    }

    /// Markdown block used by the export.
    pub fn to_markdown(&self) -> String {
        format!("### Note at {}\n\n{}\n\n---\n", self.timecode(), self.content)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotesState {
    notes: Vec<Note>,
}

impl NotesState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a note stamped at `timestamp_seconds`. Blank content is rejected.
    pub fn add(&mut self, content: &str, timestamp_seconds: f64) -> Option<Uuid> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }
        let timestamp_seconds = if timestamp_seconds.is_finite() {
            timestamp_seconds.max(0.0)
        } else {
            0.0
        };
        let note = Note {
            id: Uuid::new_v4(),
            content: content.to_string(),
            timestamp_seconds,
            created_at: Utc::now(),
        };
        let id = note.id;
        tracing::debug!(note = %id, at = timestamp_seconds, "note added");
        self.notes.push(note);
        Some(id)
    }

    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        self.notes.len() != before
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Notes ordered by playback position, then by creation time.
    pub fn sorted(&self) -> Vec<Note> {
        let mut notes = self.notes.clone();
        notes.sort_by(|a, b| {
            a.timestamp_seconds
                .total_cmp(&b.timestamp_seconds)
                .then(a.created_at.cmp(&b.created_at))
        });
        notes
    }

    pub fn export_markdown(&self) -> String {
        self.sorted()
            .iter()
            .map(Note::to_markdown)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
