//! Sheet configuration persistence
//!
//! Stores tunable thresholds and layout constants in
//! `~/.config/bottom-sheet/config.yaml`

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::commands::AnimationSpec;
use crate::sheet::{GestureStateMachine, HeightConfig, HeightResolver, TransitionThresholds};

/// Sheet configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Velocity, drag-ratio, and distance thresholds for gestures
    #[serde(default)]
    pub thresholds: TransitionThresholds,

    /// Chrome reserve and half-open fraction
    #[serde(default)]
    pub layout: HeightResolver,

    /// Animation the host runs on height changes
    #[serde(default)]
    pub animation: AnimationSpec,

    /// Preferred height of a half-open sheet
    #[serde(default = "default_initial_height")]
    pub initial_height: f32,

    /// Cap on the full-open height
    #[serde(default)]
    pub max_height: Option<f32>,
}

fn default_initial_height() -> f32 {
    400.0
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            thresholds: TransitionThresholds::default(),
            layout: HeightResolver::default(),
            animation: AnimationSpec::default(),
            initial_height: default_initial_height(),
            max_height: None,
        }
    }
}

impl SheetConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: SheetConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config.sanitized())
    }

    /// Save config to the default location
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Replace unusable values with defaults
    pub fn sanitized(self) -> Self {
        let thresholds = self.thresholds.sanitized();
        let layout = self.layout.sanitized();
        if thresholds != self.thresholds || layout != self.layout {
            tracing::warn!("Config contained invalid thresholds; falling back to defaults");
        }

        let initial_height = if self.initial_height.is_finite() && self.initial_height >= 0.0 {
            self.initial_height
        } else {
            tracing::warn!(
                "Invalid initial_height {}, using {}",
                self.initial_height,
                default_initial_height()
            );
            default_initial_height()
        };

        Self {
            thresholds,
            layout,
            animation: self.animation,
            initial_height,
            max_height: self.max_height.filter(|h| h.is_finite() && *h >= 0.0),
        }
    }

    /// Gesture state machine built from the configured thresholds
    pub fn state_machine(&self) -> GestureStateMachine {
        GestureStateMachine::new(self.thresholds)
    }

    /// Layout for a viewport, filling in the configured sheet heights
    pub fn layout_for(&self, viewport_height: f32, keyboard_inset: f32) -> HeightConfig {
        HeightConfig {
            initial_height: self.initial_height,
            max_height: self.max_height,
            keyboard_inset,
            viewport_height,
        }
    }
}
