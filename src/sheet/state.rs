//! Panel display state
//!
//! The discrete configurations a bottom sheet can be in, ordered from
//! closed to fully expanded.

use serde::{Deserialize, Serialize};

/// Discrete visible configuration of a draggable bottom panel
///
/// Ordered `Hidden < Minimized < Half < Full`. Gestures only move between
/// adjacent states inside `Minimized..=Full`; `Hidden` is entered and left
/// through the explicit close/open commands.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    #[default]
    Hidden,
    Minimized,
    Half,
    Full,
}

impl PanelState {
    /// All states in ascending order
    pub const ALL: [PanelState; 4] = [
        PanelState::Hidden,
        PanelState::Minimized,
        PanelState::Half,
        PanelState::Full,
    ];

    /// States reachable by gestures
    pub const GESTURE_RANGE: [PanelState; 3] =
        [PanelState::Minimized, PanelState::Half, PanelState::Full];

    /// One level up (towards `Full`), clamped at `Full`
    ///
    /// `Hidden` does not step: it only leaves via `open()`.
    pub fn step_up(self) -> PanelState {
        match self {
            PanelState::Hidden => PanelState::Hidden,
            PanelState::Minimized => PanelState::Half,
            PanelState::Half | PanelState::Full => PanelState::Full,
        }
    }

    /// One level down (towards `Minimized`), clamped at `Minimized`
    ///
    /// Never returns `Hidden` for a visible state.
    pub fn step_down(self) -> PanelState {
        match self {
            PanelState::Hidden => PanelState::Hidden,
            PanelState::Full => PanelState::Half,
            PanelState::Half | PanelState::Minimized => PanelState::Minimized,
        }
    }

    /// Whether the panel is rendered at all
    pub fn is_visible(self) -> bool {
        self != PanelState::Hidden
    }

    /// Whether the panel shows its content area (half or full)
    pub fn is_expanded(self) -> bool {
        matches!(self, PanelState::Half | PanelState::Full)
    }

    /// Whether `other` is the same state or one level away
    pub fn is_adjacent_or_same(self, other: PanelState) -> bool {
        (self as i8 - other as i8).abs() <= 1
    }

    /// Lowercase name, matching the serialized form
    pub fn name(self) -> &'static str {
        match self {
            PanelState::Hidden => "hidden",
            PanelState::Minimized => "minimized",
            PanelState::Half => "half",
            PanelState::Full => "full",
        }
    }

    /// Accessibility attributes the host should apply for this state
    pub fn aria(self) -> AriaAttributes {
        AriaAttributes {
            hidden: !self.is_visible(),
            expanded: self == PanelState::Full,
            label: match self {
                PanelState::Hidden => "Chat closed",
                PanelState::Minimized => "Chat minimized",
                PanelState::Half => "Chat",
                PanelState::Full => "Chat expanded",
            },
        }
    }
}

impl std::fmt::Display for PanelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// ARIA state mirrored onto the rendered panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AriaAttributes {
    /// `aria-hidden`
    pub hidden: bool,
    /// `aria-expanded` on the toggle control
    pub expanded: bool,
    /// `aria-label` for the dialog region
    pub label: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(PanelState::Hidden < PanelState::Minimized);
        assert!(PanelState::Minimized < PanelState::Half);
        assert!(PanelState::Half < PanelState::Full);
    }

    #[test]
    fn test_steps_clamp_to_gesture_range() {
        assert_eq!(PanelState::Minimized.step_up(), PanelState::Half);
        assert_eq!(PanelState::Half.step_up(), PanelState::Full);
        assert_eq!(PanelState::Full.step_up(), PanelState::Full);

        assert_eq!(PanelState::Full.step_down(), PanelState::Half);
        assert_eq!(PanelState::Half.step_down(), PanelState::Minimized);
        assert_eq!(PanelState::Minimized.step_down(), PanelState::Minimized);
    }

    #[test]
    fn test_hidden_never_steps() {
        assert_eq!(PanelState::Hidden.step_up(), PanelState::Hidden);
        assert_eq!(PanelState::Hidden.step_down(), PanelState::Hidden);
    }

    #[test]
    fn test_default_is_hidden() {
        assert_eq!(PanelState::default(), PanelState::Hidden);
    }

    #[test]
    fn test_visibility() {
        assert!(!PanelState::Hidden.is_visible());
        assert!(PanelState::Minimized.is_visible());
        assert!(!PanelState::Minimized.is_expanded());
        assert!(PanelState::Half.is_expanded());
    }

    #[test]
    fn test_adjacency() {
        assert!(PanelState::Half.is_adjacent_or_same(PanelState::Full));
        assert!(PanelState::Half.is_adjacent_or_same(PanelState::Half));
        assert!(!PanelState::Minimized.is_adjacent_or_same(PanelState::Full));
    }

    #[test]
    fn test_aria() {
        assert!(PanelState::Hidden.aria().hidden);
        assert!(!PanelState::Half.aria().hidden);
        assert!(PanelState::Full.aria().expanded);
        assert!(!PanelState::Half.aria().expanded);
    }

    #[test]
    fn test_display_honours_width() {
        assert_eq!(format!("{}", PanelState::Half), "half");
        assert_eq!(format!("{:<10}|", PanelState::Half), "half      |");
        assert_eq!(format!("{:>9}", PanelState::Full), "     full");
    }

    #[test]
    fn test_serde_names() {
        let yaml = serde_yaml::to_string(&PanelState::Minimized).unwrap();
        assert_eq!(yaml.trim(), "minimized");
        let state: PanelState = serde_yaml::from_str("full").unwrap();
        assert_eq!(state, PanelState::Full);
    }
}
