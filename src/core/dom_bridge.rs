//! Webview side of the media surface: `document::eval` channels that drive the
//! `<video>` element, move the surface between containers and report layout.
//!
//! Commands go out as JSON tagged with `kind`; replies come back the same way
//! and are decoded here so the views only ever deal with typed values.

use std::fmt;

use dioxus::prelude::document;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::geometry::{Rect, Size};
use super::playback::{MediaElement, MediaElementId, MediaEvent, PlaybackError};
use super::portal::{PortalError, SurfaceHost};
use super::slot::MountPoint;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MediaCommand {
    Attach { element: Uuid },
    Detach,
    Play,
    Pause,
    Mute { muted: bool },
    Seek { seconds: f64 },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum MediaEventWire {
    Play,
    Pause,
    Ended,
    TimeUpdate { value: f64 },
    DurationChange { value: f64 },
    PlayRejected { reason: String },
}

/// One native event as sent by the media bridge.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MediaEventMessage {
    element: Uuid,
    #[serde(flatten)]
    event: MediaEventWire,
}

impl MediaEventMessage {
    pub fn into_event(self) -> (MediaElementId, MediaEvent) {
        let event = match self.event {
            MediaEventWire::Play => MediaEvent::Play,
            MediaEventWire::Pause => MediaEvent::Pause,
            MediaEventWire::Ended => MediaEvent::Ended,
            MediaEventWire::TimeUpdate { value } => MediaEvent::TimeUpdate(value),
            MediaEventWire::DurationChange { value } => MediaEvent::DurationChange(value),
            MediaEventWire::PlayRejected { reason } => MediaEvent::PlayRejected(reason),
        };
        (MediaElementId::from(self.element), event)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PortalCommand {
    Relocate { mount: String },
    Park,
    Teardown,
    ScrollIntoView { mount: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PortalReply {
    MountMissing { mount: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct AnchorReport {
    id: String,
    rect: Rect,
}

/// Layout sample from the geometry bridge.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeometryReport {
    viewport: Size,
    /// Window-space top edge of the page scroll host.
    #[serde(default)]
    content_top: f64,
    #[serde(default)]
    anchors: Vec<AnchorReport>,
}

impl GeometryReport {
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Anchor boxes keyed by mount point, relative to the top of the page
    /// scroll host so content hidden under the title bar counts as scrolled
    /// past. Anonymous elements are skipped.
    pub fn anchors(&self) -> Vec<(MountPoint, Rect)> {
        let top = if self.content_top.is_finite() { self.content_top } else { 0.0 };
        self.anchors
            .iter()
            .filter(|anchor| !anchor.id.is_empty())
            .map(|anchor| {
                let rect = anchor.rect;
                let local = Rect::new(rect.x, rect.y - top, rect.width, rect.height);
                (MountPoint::new(anchor.id.clone()), local)
            })
            .collect()
    }
}

/// The lesson `<video>` element, driven through the media bridge.
pub struct DomMediaElement {
    id: MediaElementId,
    eval: document::Eval,
    paused: bool,
}

impl DomMediaElement {
    pub fn new(eval: document::Eval) -> Self {
        Self {
            id: MediaElementId::new(),
            eval,
            paused: true,
        }
    }

    fn send(&self, command: MediaCommand) -> Result<(), PlaybackError> {
        self.eval
            .send(command)
            .map_err(|err| PlaybackError::Bridge(err.to_string()))
    }

    fn send_logged(&self, command: MediaCommand) {
        if let Err(err) = self.send(command) {
            tracing::warn!(element = %self.id, error = %err, "media command dropped");
        }
    }
}

impl fmt::Debug for DomMediaElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomMediaElement")
            .field("id", &self.id)
            .field("paused", &self.paused)
            .finish()
    }
}

impl MediaElement for DomMediaElement {
    fn id(&self) -> MediaElementId {
        self.id
    }

    fn attach_listeners(&mut self) {
        self.send_logged(MediaCommand::Attach {
            element: self.id.as_uuid(),
        });
    }

    fn detach_listeners(&mut self) {
        self.send_logged(MediaCommand::Detach);
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        self.send(MediaCommand::Play)
    }

    fn pause(&mut self) {
        self.send_logged(MediaCommand::Pause);
    }

    fn set_muted(&mut self, muted: bool) {
        self.send_logged(MediaCommand::Mute { muted });
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.send_logged(MediaCommand::Seek { seconds });
    }

    fn observe(&mut self, event: &MediaEvent) {
        match event {
            MediaEvent::Play => self.paused = false,
            MediaEvent::Pause | MediaEvent::Ended | MediaEvent::PlayRejected(_) => self.paused = true,
            MediaEvent::TimeUpdate(_) | MediaEvent::DurationChange(_) => {}
        }
    }
}

/// Portal host backed by the portal bridge. Moves are fire-and-forget; a
/// missing container comes back later as [`PortalReply::MountMissing`].
#[derive(Default)]
pub struct DomSurfaceHost {
    eval: Option<document::Eval>,
}

impl DomSurfaceHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect(&mut self, eval: document::Eval) {
        self.eval = Some(eval);
    }

    pub fn is_connected(&self) -> bool {
        self.eval.is_some()
    }

    pub fn scroll_into_view(&self, mount: &MountPoint) -> Result<(), PortalError> {
        self.send(PortalCommand::ScrollIntoView {
            mount: mount.id().to_string(),
        })
    }

    fn send(&self, command: PortalCommand) -> Result<(), PortalError> {
        let Some(eval) = self.eval.as_ref() else {
            return Err(PortalError::Bridge("portal bridge not connected".to_string()));
        };
        eval.send(command)
            .map_err(|err| PortalError::Bridge(err.to_string()))
    }
}

impl fmt::Debug for DomSurfaceHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomSurfaceHost")
            .field("connected", &self.is_connected())
            .finish()
    }
}

impl SurfaceHost for DomSurfaceHost {
    fn relocate(&mut self, mount: &MountPoint) -> Result<(), PortalError> {
        self.send(PortalCommand::Relocate {
            mount: mount.id().to_string(),
        })
    }

    fn park(&mut self) -> Result<(), PortalError> {
        self.send(PortalCommand::Park)
    }

    fn teardown(&mut self) {
        if let Err(err) = self.send(PortalCommand::Teardown) {
            tracing::warn!(error = %err, "surface teardown not delivered");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_media_commands_are_tagged() {
        let id = Uuid::new_v4();
        assert_eq!(
            serde_json::to_value(MediaCommand::Attach { element: id }).unwrap(),
            json!({ "kind": "attach", "element": id.to_string() })
        );
        assert_eq!(
            serde_json::to_value(MediaCommand::Mute { muted: true }).unwrap(),
            json!({ "kind": "mute", "muted": true })
        );
        assert_eq!(
            serde_json::to_value(MediaCommand::Seek { seconds: 12.5 }).unwrap(),
            json!({ "kind": "seek", "seconds": 12.5 })
        );
    }

    #[test]
    fn test_media_events_decode() {
        let id = Uuid::new_v4();
        let message: MediaEventMessage = serde_json::from_value(json!({
            "element": id.to_string(),
            "kind": "time_update",
            "value": 42.25
        }))
        .unwrap();
        assert_eq!(
            message.into_event(),
            (MediaElementId::from(id), MediaEvent::TimeUpdate(42.25))
        );

        let message: MediaEventMessage = serde_json::from_value(json!({
            "element": id.to_string(),
            "kind": "play_rejected",
            "reason": "NotAllowedError"
        }))
        .unwrap();
        assert_eq!(
            message.into_event().1,
            MediaEvent::PlayRejected("NotAllowedError".to_string())
        );
    }

    #[test]
    fn test_unknown_media_event_is_an_error() {
        let result = serde_json::from_value::<MediaEventMessage>(json!({
            "element": Uuid::new_v4().to_string(),
            "kind": "volumechange"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_portal_messages() {
        assert_eq!(
            serde_json::to_value(PortalCommand::Relocate { mount: "floating-video-mount".into() }).unwrap(),
            json!({ "kind": "relocate", "mount": "floating-video-mount" })
        );
        assert_eq!(
            serde_json::to_value(PortalCommand::ScrollIntoView { mount: "a".into() }).unwrap(),
            json!({ "kind": "scroll_into_view", "mount": "a" })
        );
        let reply: PortalReply =
            serde_json::from_value(json!({ "kind": "mount_missing", "mount": "lesson-video-anchor" })).unwrap();
        assert_eq!(
            reply,
            PortalReply::MountMissing { mount: "lesson-video-anchor".to_string() }
        );
    }

    #[test]
    fn test_geometry_report_decodes_anchors() {
        let report: GeometryReport = serde_json::from_value(json!({
            "viewport": { "width": 1280.0, "height": 720.0 },
            "anchors": [
                { "id": "lesson-video-anchor", "rect": { "x": 0.0, "y": -480.0, "width": 800.0, "height": 450.0 } },
                { "id": "", "rect": { "x": 0.0, "y": 0.0, "width": 1.0, "height": 1.0 } }
            ]
        }))
        .unwrap();
        assert_eq!(report.viewport(), Size::new(1280.0, 720.0));
        let anchors = report.anchors();
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].0, MountPoint::new("lesson-video-anchor"));
        assert!(anchors[0].1.is_above_viewport());
    }

    #[test]
    fn test_anchor_under_title_bar_counts_as_scrolled_past() {
        // Bottom edge at 20 px in window space, scroll host starts at 40 px.
        let report: GeometryReport = serde_json::from_value(json!({
            "viewport": { "width": 1280.0, "height": 720.0 },
            "content_top": 40.0,
            "anchors": [
                { "id": "lesson-video-anchor", "rect": { "x": 0.0, "y": -430.0, "width": 800.0, "height": 450.0 } }
            ]
        }))
        .unwrap();
        let anchors = report.anchors();
        assert_eq!(anchors[0].1.y, -470.0);
        assert!(anchors[0].1.is_above_viewport());

        // Still partly visible below the title bar.
        let report: GeometryReport = serde_json::from_value(json!({
            "viewport": { "width": 1280.0, "height": 720.0 },
            "content_top": 40.0,
            "anchors": [
                { "id": "lesson-video-anchor", "rect": { "x": 0.0, "y": -400.0, "width": 800.0, "height": 450.0 } }
            ]
        }))
        .unwrap();
        assert!(!report.anchors()[0].1.is_above_viewport());
    }

    #[test]
    fn test_geometry_report_without_anchors() {
        let report: GeometryReport =
            serde_json::from_value(json!({ "viewport": { "width": 800.0, "height": 600.0 } })).unwrap();
        assert!(report.anchors().is_empty());
    }
}
