//! Update functions for the Elm-style architecture
//!
//! All sheet state transformations flow through these functions.

use crate::commands::Cmd;
use crate::input::key_to_msg;
use crate::messages::SheetMsg;
use crate::model::SheetModel;
use crate::sheet::{self, DragTracker, GestureSample, HeightConfig, PanelState};

#[cfg(debug_assertions)]
use crate::tracing::SheetSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

/// Main update function
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut SheetModel, msg: SheetMsg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

fn update_inner(model: &mut SheetModel, msg: SheetMsg) -> Option<Cmd> {
    match msg {
        SheetMsg::Open => {
            let was_visible = model.state.is_visible();
            model.drag = None;
            let mut cmds = set_state(model, sheet::open());
            if !was_visible {
                cmds.push(Cmd::FocusPanel);
            }
            Cmd::batch(cmds)
        }

        SheetMsg::Close => {
            let was_visible = model.state.is_visible();
            model.drag = None;
            let mut cmds = set_state(model, sheet::close());
            if was_visible {
                cmds.push(Cmd::RestoreFocus);
            }
            Cmd::batch(cmds)
        }

        SheetMsg::ToggleExpand => {
            let was_visible = model.state.is_visible();
            model.drag = None;
            let next = sheet::toggle_expand(model.state);
            let mut cmds = set_state(model, next);
            if !was_visible {
                cmds.push(Cmd::FocusPanel);
            }
            Cmd::batch(cmds)
        }

        SheetMsg::DragStart { y, time_ms } => {
            if !model.state.is_visible() || !y.is_finite() {
                return None;
            }
            model.drag = Some(DragTracker::start(y, time_ms));
            Some(Cmd::Redraw)
        }

        SheetMsg::DragMove { y, time_ms } => {
            let drag = model.drag.as_mut()?;
            drag.record(y, time_ms);
            Some(Cmd::Redraw)
        }

        SheetMsg::DragEnd { y, time_ms } => {
            let drag = model.drag.take()?;
            let sample = drag.finish(y, time_ms);
            apply_gesture(model, sample)
        }

        SheetMsg::DragCancel => {
            let drag = model.drag.take()?;
            // Snap back from wherever the finger left the panel
            let from = model.height_with_offset(drag.offset());
            Cmd::batch(animate(model, from, model.height))
        }

        SheetMsg::GestureEnd(sample) => {
            model.drag = None;
            apply_gesture(model, sample)
        }

        SheetMsg::LayoutChanged { seq, config } => apply_layout(model, seq, config),

        SheetMsg::Key { key, target } => {
            let msg = key_to_msg(key, target, model.state)?;
            update_inner(model, msg)
        }

        SheetMsg::Unmount => {
            model.drag = None;
            model.state = PanelState::Hidden;
            model.height = 0.0;
            None
        }
    }
}

/// Move to `next`, returning the render commands for the change
fn set_state(model: &mut SheetModel, next: PanelState) -> Vec<Cmd> {
    if next == model.state {
        return Vec::new();
    }

    let from = model.height;
    model.state = next;
    model.refresh_height();

    let mut cmds = animate(model, from, model.height);
    cmds.push(Cmd::SetAria(next.aria()));
    cmds
}

fn animate(model: &SheetModel, from: f32, to: f32) -> Vec<Cmd> {
    if from == to {
        return Vec::new();
    }
    vec![Cmd::AnimateHeight {
        from,
        to,
        animation: model.config.animation,
    }]
}

/// Resolve a completed gesture against the current state
fn apply_gesture(model: &mut SheetModel, sample: GestureSample) -> Option<Cmd> {
    if !model.state.is_visible() {
        return None;
    }

    let released_at = model.height_with_offset(sample.offset_y);
    let next = model.decide(sample);

    if next == model.state {
        // No transition; settle back from the release position
        return Cmd::batch(animate(model, released_at, model.height));
    }

    model.state = next;
    model.refresh_height();
    let mut cmds = animate(model, released_at, model.height);
    cmds.push(Cmd::SetAria(next.aria()));
    Cmd::batch(cmds)
}

/// Apply a layout event unless a newer one has already been applied
fn apply_layout(model: &mut SheetModel, seq: u64, config: HeightConfig) -> Option<Cmd> {
    if let Some(last) = model.layout_seq {
        if seq <= last {
            tracing::debug!(
                target: "sheet::layout",
                seq,
                last,
                "discarding stale layout"
            );
            return None;
        }
    }

    model.layout = Some(config);
    model.layout_seq = Some(seq);

    let from = model.height;
    model.refresh_height();
    Cmd::batch(animate(model, from, model.height))
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after sheet state and logs diffs for debugging.
/// Drag moves are too frequent to log.
#[cfg(debug_assertions)]
fn update_traced(model: &mut SheetModel, msg: SheetMsg) -> Option<Cmd> {
    let is_noisy = matches!(&msg, SheetMsg::DragMove { .. });

    let msg_name = format!("{:?}", msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = SheetSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = SheetSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "sheet", %diff, "state changed");
    }

    model.assert_invariants_with_context(&msg_name);

    result
}
