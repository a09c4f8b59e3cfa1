//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use bottom_sheet::config::SheetConfig;
use bottom_sheet::messages::SheetMsg;
use bottom_sheet::model::SheetModel;
use bottom_sheet::sheet::{GestureSample, HeightConfig, PanelState};
use bottom_sheet::update::update;

/// Create a model with an 800px viewport, opened into `state`
pub fn test_model(state: PanelState) -> SheetModel {
    let mut model = SheetModel::with_viewport(SheetConfig::default(), 800.0);
    match state {
        PanelState::Hidden => {}
        PanelState::Half => {
            update(&mut model, SheetMsg::Open);
        }
        PanelState::Full => {
            update(&mut model, SheetMsg::Open);
            update(&mut model, SheetMsg::ToggleExpand);
        }
        PanelState::Minimized => {
            update(&mut model, SheetMsg::Open);
            update(&mut model, SheetMsg::GestureEnd(fling_down()));
        }
    }
    assert_eq!(model.state, state, "test_model failed to reach {}", state);
    model
}

/// Layout helper
pub fn layout(viewport: f32, inset: f32, initial: f32, max: Option<f32>) -> HeightConfig {
    HeightConfig {
        initial_height: initial,
        max_height: max,
        keyboard_inset: inset,
        viewport_height: viewport,
    }
}

pub fn fling_down() -> GestureSample {
    GestureSample::new(20.0, 900.0)
}

pub fn fling_up() -> GestureSample {
    GestureSample::new(-20.0, -900.0)
}

/// Samples covering the interesting corners of the input space
pub fn sample_grid() -> Vec<GestureSample> {
    let offsets = [-1000.0, -250.0, -120.0, -60.0, 0.0, 60.0, 120.0, 250.0, 1000.0];
    let velocities = [-5000.0, -600.0, -500.0, -100.0, 0.0, 100.0, 500.0, 600.0, 5000.0];
    let mut samples = Vec::new();
    for &offset_y in &offsets {
        for &velocity_y in &velocities {
            samples.push(GestureSample::new(offset_y, velocity_y));
        }
    }
    samples.push(GestureSample::new(f32::NAN, 0.0));
    samples.push(GestureSample::new(0.0, f32::NAN));
    samples.push(GestureSample::new(f32::INFINITY, f32::NEG_INFINITY));
    samples
}

/// Simulate a drag on the handle: start at `from`, move linearly to `to`
/// over `duration_ms`, then release
pub fn drag(model: &mut SheetModel, from: f32, to: f32, duration_ms: u64) {
    let steps = 10u64;
    update(model, SheetMsg::DragStart { y: from, time_ms: 0 });
    for i in 1..=steps {
        let t = i as f32 / steps as f32;
        update(
            model,
            SheetMsg::DragMove {
                y: from + (to - from) * t,
                time_ms: duration_ms * i / steps,
            },
        );
    }
    update(
        model,
        SheetMsg::DragEnd {
            y: to,
            time_ms: duration_ms,
        },
    );
}
