//! Host-side sheet model
//!
//! Owns the mutable `PanelState` of one sheet instance together with the
//! latest layout and any in-progress drag. Only `update::update` mutates it.

use crate::config::SheetConfig;
use crate::sheet::{
    DragTracker, GestureSample, GestureStateMachine, HeightConfig, HeightResolver, PanelState,
};

/// State for a single bottom sheet
#[derive(Debug, Clone)]
pub struct SheetModel {
    /// Current discrete state
    pub state: PanelState,

    /// Most recent layout, if the host has reported one
    pub layout: Option<HeightConfig>,

    /// Sequence number of `layout`; older layouts are discarded
    pub layout_seq: Option<u64>,

    /// Resolved height for `state` under `layout`
    pub height: f32,

    /// Drag in progress, if any
    pub drag: Option<DragTracker>,

    pub config: SheetConfig,

    machine: GestureStateMachine,
    resolver: HeightResolver,
}

impl Default for SheetModel {
    fn default() -> Self {
        Self::new(SheetConfig::default())
    }
}

impl SheetModel {
    /// Create a hidden sheet with no layout yet
    pub fn new(config: SheetConfig) -> Self {
        let config = config.sanitized();
        Self {
            state: PanelState::Hidden,
            layout: None,
            layout_seq: None,
            height: 0.0,
            drag: None,
            machine: config.state_machine(),
            resolver: config.layout,
            config,
        }
    }

    /// Create a hidden sheet with an initial viewport (sequence 0)
    pub fn with_viewport(config: SheetConfig, viewport_height: f32) -> Self {
        let mut model = Self::new(config);
        let layout = model.config.layout_for(viewport_height, 0.0);
        model.layout = Some(layout);
        model.layout_seq = Some(0);
        model
    }

    /// Height `state` would have under the current layout
    ///
    /// Without a layout the sheet has nowhere to render and resolves to 0.
    pub fn height_for(&self, state: PanelState) -> f32 {
        match &self.layout {
            Some(layout) => self.resolver.resolve(state, layout),
            None => 0.0,
        }
    }

    /// Usable viewport after the keyboard, 0 without a layout
    pub fn effective_viewport(&self) -> f32 {
        self.layout
            .as_ref()
            .map(HeightConfig::effective_viewport)
            .unwrap_or(0.0)
    }

    /// Height the panel would have right now with `offset_y` of drag applied
    pub fn height_with_offset(&self, offset_y: f32) -> f32 {
        if !offset_y.is_finite() {
            return self.height;
        }
        (self.height - offset_y).clamp(0.0, self.effective_viewport())
    }

    /// Height to render, following the finger during a drag
    pub fn live_height(&self) -> f32 {
        match &self.drag {
            Some(drag) => self.height_with_offset(drag.offset()),
            None => self.height,
        }
    }

    /// Decide the next state for a completed gesture
    pub fn decide(&self, sample: GestureSample) -> PanelState {
        self.machine.decide(self.state, sample, Some(self.height))
    }

    /// Recompute `height` from the current state and layout
    pub fn refresh_height(&mut self) -> f32 {
        self.height = self.height_for(self.state);
        self.height
    }

    /// Check model invariants, panicking with context on violation
    ///
    /// Debug builds call this after every update.
    pub fn assert_invariants_with_context(&self, context: &str) {
        assert!(
            self.height >= 0.0 && self.height <= self.effective_viewport().max(0.0),
            "[{}] height {} outside 0..={}",
            context,
            self.height,
            self.effective_viewport()
        );
        assert!(
            self.state.is_visible() || self.height == 0.0,
            "[{}] hidden sheet has height {}",
            context,
            self.height
        );
        assert!(
            self.state.is_visible() || self.drag.is_none(),
            "[{}] hidden sheet is being dragged",
            context
        );
    }
}
