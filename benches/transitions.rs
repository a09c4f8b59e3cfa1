//! Benchmarks for gesture decisions, height resolution, and the update loop
//!
//! Run with: cargo bench transitions

use bottom_sheet::messages::SheetMsg;
use bottom_sheet::model::SheetModel;
use bottom_sheet::sheet::{
    resolve_height, transition, GestureSample, HeightConfig, PanelState,
};
use bottom_sheet::update::update;
use bottom_sheet::SheetConfig;

fn main() {
    divan::main();
}

#[divan::bench(args = [PanelState::Minimized, PanelState::Half, PanelState::Full])]
fn gesture_transition(state: PanelState) {
    let sample = GestureSample::new(divan::black_box(120.0), divan::black_box(-300.0));
    divan::black_box(transition(state, sample, 100.0));
}

#[divan::bench(args = [PanelState::Minimized, PanelState::Half, PanelState::Full])]
fn height_resolution(state: PanelState) {
    let config = HeightConfig {
        initial_height: 400.0,
        max_height: Some(700.0),
        keyboard_inset: divan::black_box(300.0),
        viewport_height: divan::black_box(812.0),
    };
    divan::black_box(resolve_height(state, &config));
}

/// Full drag interaction: start, 60 moves at 120Hz, release
#[divan::bench]
fn drag_interaction(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| {
            let mut model = SheetModel::with_viewport(SheetConfig::default(), 812.0);
            update(&mut model, SheetMsg::Open);
            model
        })
        .bench_local_values(|mut model| {
            update(&mut model, SheetMsg::DragStart { y: 400.0, time_ms: 0 });
            for i in 1..=60u64 {
                update(
                    &mut model,
                    SheetMsg::DragMove {
                        y: 400.0 - i as f32 * 3.0,
                        time_ms: i * 8,
                    },
                );
            }
            update(&mut model, SheetMsg::DragEnd { y: 220.0, time_ms: 488 });
            model
        });
}

/// Burst of layout events as a keyboard animates in
#[divan::bench]
fn keyboard_layout_burst(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| {
            let mut model = SheetModel::with_viewport(SheetConfig::default(), 812.0);
            update(&mut model, SheetMsg::Open);
            model
        })
        .bench_local_values(|mut model| {
            let config = model.config.clone();
            for seq in 1..=30u64 {
                update(
                    &mut model,
                    SheetMsg::LayoutChanged {
                        seq,
                        config: config.layout_for(812.0, seq as f32 * 11.0),
                    },
                );
            }
            model
        });
}
