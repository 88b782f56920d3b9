//! Hotkey system
//!
//! Centralized hotkey management for the lesson player.
//!
//! # Architecture
//!
//! - **HotkeyAction**: Enum of all possible actions that can be triggered by hotkeys
//! - **HotkeyContext**: Determines which hotkeys are active based on app state
//! - **handle_hotkey()**: Main dispatch function that maps key events to actions
//!
//! # Adding New Hotkeys
//!
//! 1. Add a variant to `HotkeyAction`
//! 2. Add the key binding in `handle_hotkey()`
//! 3. Handle the action in the App component's hotkey handler

use dioxus::prelude::Key;

/// All possible actions that can be triggered by hotkeys.
///
/// Each variant represents a semantic action, not a key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Toggle playback.
    PlayPause,
    /// Toggle mute.
    ToggleMute,
    /// Jump back a few seconds.
    SeekBackward,
    /// Jump forward a few seconds.
    SeekForward,
    /// Close the floating player.
    ClosePlayer,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether a playback session exists
    pub has_session: bool,
    /// Whether the player is currently floating
    pub floating: bool,
    /// Whether an input field has focus (should suppress all hotkeys)
    pub input_focused: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey would match but is suppressed (e.g., input field focused)
    Suppressed,
}

/// Maps a key event to an action, considering the current context.
///
/// Modifier chords are left to the webview; only bare keys are bound.
pub fn handle_hotkey(
    key: &Key,
    _shift: bool,
    ctrl: bool,
    alt: bool,
    meta: bool,
    context: &HotkeyContext,
) -> HotkeyResult {
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }
    if ctrl || alt || meta || !context.has_session {
        return HotkeyResult::NoMatch;
    }

    let action = match key {
        Key::Character(c) if c == " " => HotkeyAction::PlayPause,
        Key::Character(c) if c.eq_ignore_ascii_case("m") => HotkeyAction::ToggleMute,
        Key::ArrowLeft => HotkeyAction::SeekBackward,
        Key::ArrowRight => HotkeyAction::SeekForward,
        Key::Escape if context.floating => HotkeyAction::ClosePlayer,
        _ => return HotkeyResult::NoMatch,
    };
    HotkeyResult::Action(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing() -> HotkeyContext {
        HotkeyContext {
            has_session: true,
            ..Default::default()
        }
    }

    fn press(key: Key, ctx: &HotkeyContext) -> HotkeyResult {
        handle_hotkey(&key, false, false, false, false, ctx)
    }

    #[test]
    fn test_space_toggles_playback() {
        let result = press(Key::Character(" ".to_string()), &playing());
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::PlayPause)));
    }

    #[test]
    fn test_m_toggles_mute() {
        let result = press(Key::Character("M".to_string()), &playing());
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::ToggleMute)));
    }

    #[test]
    fn test_arrows_seek() {
        assert!(matches!(
            press(Key::ArrowLeft, &playing()),
            HotkeyResult::Action(HotkeyAction::SeekBackward)
        ));
        assert!(matches!(
            press(Key::ArrowRight, &playing()),
            HotkeyResult::Action(HotkeyAction::SeekForward)
        ));
    }

    #[test]
    fn test_escape_only_closes_floating_player() {
        assert!(matches!(press(Key::Escape, &playing()), HotkeyResult::NoMatch));
        let ctx = HotkeyContext {
            floating: true,
            ..playing()
        };
        assert!(matches!(
            press(Key::Escape, &ctx),
            HotkeyResult::Action(HotkeyAction::ClosePlayer)
        ));
    }

    #[test]
    fn test_no_session_no_match() {
        let result = press(Key::Character(" ".to_string()), &HotkeyContext::default());
        assert!(matches!(result, HotkeyResult::NoMatch));
    }

    #[test]
    fn test_modifier_chords_are_ignored() {
        let result = handle_hotkey(&Key::Character("m".to_string()), false, true, false, false, &playing());
        assert!(matches!(result, HotkeyResult::NoMatch));
    }

    #[test]
    fn test_suppressed_when_input_focused() {
        let ctx = HotkeyContext {
            input_focused: true,
            ..playing()
        };
        let result = press(Key::Character(" ".to_string()), &ctx);
        assert!(matches!(result, HotkeyResult::Suppressed));
    }
}
