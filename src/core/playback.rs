//! Playback state store.
//!
//! Single source of truth for play/pause, mute, time and duration. Exactly one
//! media element can be bound at a time. Native media events are the only
//! writers of `is_playing`; commands issued here are requests.

use std::fmt;

use uuid::Uuid;

/// Identity of one concrete media element. Re-registering the same id is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaElementId(Uuid);

impl MediaElementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for MediaElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for MediaElementId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for MediaElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Native notifications coming from the bound element.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    Play,
    Pause,
    Ended,
    TimeUpdate(f64),
    DurationChange(f64),
    /// The runtime refused a play request (autoplay policy and the like).
    PlayRejected(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackError {
    /// The runtime vetoed playback synchronously.
    PlaybackDenied(String),
    /// The command could not be delivered to the element.
    Bridge(String),
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::PlaybackDenied(reason) => write!(f, "playback denied: {}", reason),
            PlaybackError::Bridge(reason) => write!(f, "media bridge error: {}", reason),
        }
    }
}

impl std::error::Error for PlaybackError {}

/// A concrete, live media element the store can drive.
pub trait MediaElement {
    fn id(&self) -> MediaElementId;
    /// Start forwarding native events to the store.
    fn attach_listeners(&mut self);
    /// Stop forwarding native events.
    fn detach_listeners(&mut self);
    fn is_paused(&self) -> bool;
    /// Request playback. An `Err` means the request was refused outright; an
    /// asynchronous refusal arrives later as [`MediaEvent::PlayRejected`].
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn pause(&mut self);
    fn set_muted(&mut self, muted: bool);
    fn set_current_time(&mut self, seconds: f64);
    /// Mirror a native event into element-side caches.
    fn observe(&mut self, _event: &MediaEvent) {}
}

/// Snapshot of the playback state for display.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackState {
    pub current_time_seconds: f64,
    /// `0.0` until metadata loads.
    pub duration_seconds: f64,
    pub is_playing: bool,
    pub is_muted: bool,
}

/// Outcome of [`PlaybackStore::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// Nothing was bound before.
    Bound,
    /// Same element as the one already bound; nothing changed.
    AlreadyBound,
    /// A different element replaced the previous one.
    Replaced(MediaElementId),
}

#[derive(Default)]
pub struct PlaybackStore {
    state: PlaybackState,
    element: Option<Box<dyn MediaElement>>,
}

impl fmt::Debug for PlaybackStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackStore")
            .field("state", &self.state)
            .field("element", &self.element.as_ref().map(|element| element.id()))
            .finish()
    }
}

impl PlaybackStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current_time(&self) -> f64 {
        self.state.current_time_seconds
    }

    /// A session is active while an element is bound.
    pub fn has_session(&self) -> bool {
        self.element.is_some()
    }

    pub fn element_id(&self) -> Option<MediaElementId> {
        self.element.as_ref().map(|element| element.id())
    }

    /// Bind `element` as the single playback authority.
    pub fn register(&mut self, mut element: Box<dyn MediaElement>) -> Registration {
        let incoming = element.id();
        if self.element_id() == Some(incoming) {
            tracing::debug!(element = %incoming, "media element re-registered");
            return Registration::AlreadyBound;
        }

        let replaced = self.element.take().map(|mut old| {
            old.detach_listeners();
            old.id()
        });

        element.attach_listeners();
        element.set_muted(self.state.is_muted);
        self.element = Some(element);
        self.state = PlaybackState {
            is_muted: self.state.is_muted,
            ..PlaybackState::default()
        };

        match replaced {
            Some(old) => {
                tracing::info!(old = %old, new = %incoming, "media element replaced");
                Registration::Replaced(old)
            }
            None => {
                tracing::info!(element = %incoming, "media element bound");
                Registration::Bound
            }
        }
    }

    /// Drop the binding when the owning view goes away. Ignored for any
    /// element other than the bound one.
    pub fn unregister(&mut self, id: MediaElementId) -> bool {
        if self.element_id() != Some(id) {
            return false;
        }
        if let Some(mut element) = self.element.take() {
            element.detach_listeners();
        }
        self.state.is_playing = false;
        tracing::debug!(element = %id, "media element unregistered");
        true
    }

    pub fn toggle_play(&mut self) {
        let Some(element) = self.element.as_mut() else {
            return;
        };
        if element.is_paused() {
            if let Err(err) = element.play() {
                tracing::warn!(error = %err, "play request refused");
            }
        } else {
            element.pause();
        }
    }

    pub fn toggle_mute(&mut self) {
        let Some(element) = self.element.as_mut() else {
            return;
        };
        let muted = !self.state.is_muted;
        element.set_muted(muted);
        self.state.is_muted = muted;
    }

    /// Seek, mirroring the new time optimistically until the next `TimeUpdate`.
    pub fn seek_to(&mut self, seconds: f64) {
        let Some(element) = self.element.as_mut() else {
            return;
        };
        if !seconds.is_finite() {
            return;
        }
        let mut target = seconds.max(0.0);
        if self.state.duration_seconds > 0.0 {
            target = target.min(self.state.duration_seconds);
        }
        element.set_current_time(target);
        self.state.current_time_seconds = target;
    }

    /// Tear the session down for good. Returns the element that was bound.
    pub fn close_video(&mut self) -> Option<MediaElementId> {
        let mut element = self.element.take()?;
        if self.state.is_playing || !element.is_paused() {
            element.pause();
        }
        element.detach_listeners();
        self.state.is_playing = false;
        let id = element.id();
        tracing::info!(element = %id, "playback session closed");
        Some(id)
    }

    /// Apply a native event. Events from anything but the bound element are dropped.
    pub fn handle_event(&mut self, source: MediaElementId, event: MediaEvent) {
        let Some(element) = self.element.as_mut() else {
            tracing::trace!(source = %source, ?event, "media event without a session");
            return;
        };
        if element.id() != source {
            tracing::trace!(source = %source, ?event, "media event from stale element");
            return;
        }
        element.observe(&event);

        match event {
            MediaEvent::Play => self.state.is_playing = true,
            MediaEvent::Pause | MediaEvent::Ended => self.state.is_playing = false,
            MediaEvent::TimeUpdate(seconds) => {
                if seconds.is_finite() {
                    self.state.current_time_seconds = seconds.max(0.0);
                }
            }
            MediaEvent::DurationChange(seconds) => {
                self.state.duration_seconds = if seconds.is_finite() && seconds > 0.0 {
                    seconds
                } else {
                    0.0
                };
            }
            MediaEvent::PlayRejected(reason) => {
                self.state.is_playing = false;
                tracing::warn!(%reason, "playback denied by runtime");
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Attach,
        Detach,
        Play,
        Pause,
        Muted(bool),
        Seek(f64),
    }

    /// Records every command and mimics a real element's paused flag.
    pub struct FakeMedia {
        pub id: MediaElementId,
        pub paused: bool,
        pub refuse_play: bool,
        pub calls: Rc<RefCell<Vec<Call>>>,
    }

    impl FakeMedia {
        pub fn new() -> (Self, Rc<RefCell<Vec<Call>>>) {
            Self::with_id(MediaElementId::new())
        }

        pub fn with_id(id: MediaElementId) -> (Self, Rc<RefCell<Vec<Call>>>) {
            let calls = Rc::new(RefCell::new(Vec::new()));
            (
                Self {
                    id,
                    paused: true,
                    refuse_play: false,
                    calls: Rc::clone(&calls),
                },
                calls,
            )
        }
    }

    impl MediaElement for FakeMedia {
        fn id(&self) -> MediaElementId {
            self.id
        }
        fn attach_listeners(&mut self) {
            self.calls.borrow_mut().push(Call::Attach);
        }
        fn detach_listeners(&mut self) {
            self.calls.borrow_mut().push(Call::Detach);
        }
        fn is_paused(&self) -> bool {
            self.paused
        }
        fn play(&mut self) -> Result<(), PlaybackError> {
            self.calls.borrow_mut().push(Call::Play);
            if self.refuse_play {
                return Err(PlaybackError::PlaybackDenied("autoplay blocked".to_string()));
            }
            Ok(())
        }
        fn pause(&mut self) {
            self.calls.borrow_mut().push(Call::Pause);
        }
        fn set_muted(&mut self, muted: bool) {
            self.calls.borrow_mut().push(Call::Muted(muted));
        }
        fn set_current_time(&mut self, seconds: f64) {
            self.calls.borrow_mut().push(Call::Seek(seconds));
        }
        fn observe(&mut self, event: &MediaEvent) {
            match event {
                MediaEvent::Play => self.paused = false,
                MediaEvent::Pause | MediaEvent::Ended | MediaEvent::PlayRejected(_) => {
                    self.paused = true
                }
                _ => {}
            }
        }
    }
}
