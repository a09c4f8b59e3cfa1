//! Message types for the Elm-style architecture
//!
//! All sheet state changes flow through these message types.

use serde::{Deserialize, Serialize};

use crate::sheet::{GestureSample, HeightConfig};

/// Keys the sheet reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    Escape,
    Enter,
    Space,
}

/// Element that had focus when a key was pressed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyTarget {
    /// Anywhere inside the panel
    #[default]
    Panel,
    /// The expand/collapse toggle control
    ToggleControl,
}

/// Messages handled by `update::update`
#[derive(Debug, Clone, PartialEq)]
pub enum SheetMsg {
    // === Explicit commands ===
    /// Open the sheet at half height
    Open,
    /// Close the sheet from any state
    Close,
    /// Tap on the toggle control: half <-> full
    ToggleExpand,

    // === Raw pointer events ===
    /// Pointer pressed on the drag handle
    DragStart { y: f32, time_ms: u64 },
    /// Pointer moved while dragging
    DragMove { y: f32, time_ms: u64 },
    /// Pointer released
    DragEnd { y: f32, time_ms: u64 },
    /// Drag aborted by the platform (pointer cancel, lost capture)
    DragCancel,

    /// Completed gesture measured by the host itself
    GestureEnd(GestureSample),

    // === Layout ===
    /// Viewport or keyboard inset changed; `seq` increases with every event
    LayoutChanged { seq: u64, config: HeightConfig },

    // === Keyboard ===
    Key { key: Key, target: KeyTarget },

    /// Host component is going away
    Unmount,
}
