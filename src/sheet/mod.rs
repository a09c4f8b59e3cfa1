//! Bottom sheet core - display states, gesture transitions, and heights
//!
//! Everything in this module is pure and free of any UI framework so it can
//! be unit-tested without a rendering environment.
//!
//! ## Architecture
//!
//! - `PanelState`: Hidden, Minimized, Half, or Full
//! - `GestureSample`: offset and velocity of a completed drag
//! - `GestureStateMachine`: decides the next state for a gesture
//! - `HeightResolver`: maps a state and `HeightConfig` to a pixel height
//! - `DragTracker`: turns raw pointer moves into a `GestureSample`
//!
//! ## Integration
//!
//! The host model in `model.rs` owns the mutable `PanelState` and drives these
//! functions through `update::update`.

mod drag;
mod gesture;
mod height;
mod state;

pub use drag::{DragTracker, VELOCITY_WINDOW_MS};
pub use gesture::{
    close, open, toggle_expand, transition, GestureSample, GestureStateMachine,
    TransitionThresholds, DEFAULT_DISTANCE_THRESHOLD, DEFAULT_DRAG_RATIO,
    DEFAULT_VELOCITY_THRESHOLD,
};
pub use height::{
    resolve_height, HeightConfig, HeightResolver, DEFAULT_CHROME_RESERVE, DEFAULT_HALF_FRACTION,
};
pub use state::{AriaAttributes, PanelState};
