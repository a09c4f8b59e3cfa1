//! Height resolution for sheet states
//!
//! Maps a `PanelState` and the current layout to the pixel height the panel
//! occupies, keeping clear of the on-screen keyboard.

use serde::{Deserialize, Serialize};

use super::state::PanelState;

/// Pixels reserved for surrounding chrome (header bars, safe-area insets)
pub const DEFAULT_CHROME_RESERVE: f32 = 60.0;

/// Fraction of the usable viewport a half-open sheet may take
pub const DEFAULT_HALF_FRACTION: f32 = 0.6;

/// Layout inputs supplied by the host on every resize or keyboard change
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightConfig {
    /// Preferred height of a half-open sheet
    pub initial_height: f32,
    /// Upper bound for a full sheet, if any
    #[serde(default)]
    pub max_height: Option<f32>,
    /// Viewport height consumed by the on-screen keyboard
    #[serde(default)]
    pub keyboard_inset: f32,
    pub viewport_height: f32,
}

impl Default for HeightConfig {
    fn default() -> Self {
        Self {
            initial_height: 400.0,
            max_height: None,
            keyboard_inset: 0.0,
            viewport_height: 800.0,
        }
    }
}

impl HeightConfig {
    /// Viewport height left after the keyboard, never negative
    ///
    /// Non-finite inputs count as an unavailable layout.
    pub fn effective_viewport(&self) -> f32 {
        if !self.viewport_height.is_finite() {
            return 0.0;
        }
        let inset = if self.keyboard_inset.is_finite() {
            self.keyboard_inset.max(0.0)
        } else {
            0.0
        };
        (self.viewport_height - inset).max(0.0)
    }
}

/// Height resolver with configurable layout constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeightResolver {
    pub chrome_reserve_px: f32,
    pub half_fraction: f32,
}

impl Default for HeightResolver {
    fn default() -> Self {
        Self {
            chrome_reserve_px: DEFAULT_CHROME_RESERVE,
            half_fraction: DEFAULT_HALF_FRACTION,
        }
    }
}

impl HeightResolver {
    /// Clamp constants into usable ranges
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            chrome_reserve_px: if self.chrome_reserve_px.is_finite() {
                self.chrome_reserve_px.max(0.0)
            } else {
                defaults.chrome_reserve_px
            },
            half_fraction: if self.half_fraction.is_finite()
                && self.half_fraction > 0.0
                && self.half_fraction <= 1.0
            {
                self.half_fraction
            } else {
                defaults.half_fraction
            },
        }
    }

    /// Target height for `state` under `config`
    ///
    /// Always within `0..=config.effective_viewport()`.
    pub fn resolve(&self, state: PanelState, config: &HeightConfig) -> f32 {
        let effective = config.effective_viewport();
        if effective <= 0.0 {
            return 0.0;
        }

        let height = match state {
            PanelState::Full => {
                let cap = config.max_height.unwrap_or(effective).min(effective);
                cap - self.chrome_reserve_px
            }
            PanelState::Half => config.initial_height.min(effective * self.half_fraction),
            PanelState::Minimized | PanelState::Hidden => 0.0,
        };

        // f32::max drops NaN in favour of the other operand
        height.max(0.0).min(effective)
    }
}

/// Target height for `state` using the default chrome reserve and half fraction
pub fn resolve_height(state: PanelState, config: &HeightConfig) -> f32 {
    HeightResolver::default().resolve(state, config)
}
