//! Keyboard handling
//!
//! Maps key presses to sheet messages. `Escape` closes a visible sheet;
//! `Enter` and `Space` on the toggle control switch between half and full.

use crate::messages::{Key, KeyTarget, SheetMsg};
use crate::sheet::PanelState;

/// Translate a key press into a sheet message, if it means anything
pub fn key_to_msg(key: Key, target: KeyTarget, state: PanelState) -> Option<SheetMsg> {
    if !state.is_visible() {
        return None;
    }

    match (key, target) {
        (Key::Escape, _) => Some(SheetMsg::Close),
        (Key::Enter | Key::Space, KeyTarget::ToggleControl) => Some(SheetMsg::ToggleExpand),
        (Key::Enter | Key::Space, KeyTarget::Panel) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_closes_from_any_visible_state() {
        for state in PanelState::GESTURE_RANGE {
            assert_eq!(
                key_to_msg(Key::Escape, KeyTarget::Panel, state),
                Some(SheetMsg::Close)
            );
        }
    }

    #[test]
    fn test_keys_ignored_while_hidden() {
        assert_eq!(key_to_msg(Key::Escape, KeyTarget::Panel, PanelState::Hidden), None);
        assert_eq!(
            key_to_msg(Key::Enter, KeyTarget::ToggleControl, PanelState::Hidden),
            None
        );
    }

    #[test]
    fn test_toggle_control_activation() {
        assert_eq!(
            key_to_msg(Key::Space, KeyTarget::ToggleControl, PanelState::Half),
            Some(SheetMsg::ToggleExpand)
        );
        assert_eq!(key_to_msg(Key::Enter, KeyTarget::Panel, PanelState::Half), None);
    }
}
