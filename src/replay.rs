//! Scripted replay of sheet interactions
//!
//! Reads a YAML list of high-level events (open, drag, layout change, key
//! press), expands them into `SheetMsg`s, and records the state and height
//! after each one. Used by the `sheet-replay` binary and by tests that drive
//! the whole update loop.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::SheetConfig;
use crate::messages::{Key, KeyTarget, SheetMsg};
use crate::model::SheetModel;
use crate::sheet::{GestureSample, PanelState};
use crate::update::update;

/// Pointer samples generated per scripted drag, excluding start and release
const DEFAULT_DRAG_STEPS: u32 = 8;

/// Upper bound on `steps` for one scripted drag
pub const MAX_DRAG_STEPS: u32 = 10_000;

/// Upper bound on `duration_ms` for one scripted drag
pub const MAX_DRAG_DURATION_MS: u64 = 60_000;

fn default_viewport() -> f32 {
    800.0
}

fn default_drag_duration() -> u64 {
    200
}

/// A replay script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Initial viewport height
    #[serde(default = "default_viewport")]
    pub viewport: f32,
    /// Events in map form (`drag: { from: 400, to: 300 }`)
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub events: Vec<ScriptEvent>,
}

/// One scripted interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptEvent {
    Open,
    Close,
    /// Tap on the toggle control
    Toggle,
    /// Linear drag of the handle from `from` to `to` (screen y)
    Drag {
        from: f32,
        to: f32,
        #[serde(default = "default_drag_duration")]
        duration_ms: u64,
        #[serde(default)]
        steps: Option<u32>,
    },
    /// Drag that the platform cancels before release
    CancelledDrag { from: f32, to: f32 },
    /// Pre-measured gesture
    Gesture { offset_y: f32, velocity_y: f32 },
    /// Viewport or keyboard change
    Layout {
        viewport_height: f32,
        #[serde(default)]
        keyboard_inset: f32,
    },
    /// Key pressed with focus inside the panel
    Key(Key),
    /// Key pressed on the toggle control
    ToggleKey(Key),
    Unmount,
}

impl Script {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Invalid script {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let script: Script = serde_yaml::from_str(content)?;
        script.validate()?;
        Ok(script)
    }

    /// Reject drags too long or too finely sampled to replay
    pub fn validate(&self) -> Result<()> {
        for (index, event) in self.events.iter().enumerate() {
            if let ScriptEvent::Drag {
                duration_ms, steps, ..
            } = *event
            {
                if let Some(steps) = steps {
                    anyhow::ensure!(
                        steps <= MAX_DRAG_STEPS,
                        "events[{}]: drag steps {} exceeds {}",
                        index,
                        steps,
                        MAX_DRAG_STEPS
                    );
                }
                anyhow::ensure!(
                    duration_ms <= MAX_DRAG_DURATION_MS,
                    "events[{}]: drag duration {}ms exceeds {}ms",
                    index,
                    duration_ms,
                    MAX_DRAG_DURATION_MS
                );
            }
        }
        Ok(())
    }
}

/// Outcome of one scripted event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayStep {
    pub index: usize,
    pub event: String,
    pub state: PanelState,
    pub height: f32,
    /// Height the host was asked to animate to, if any
    pub animate_to: Option<f32>,
}

/// Drives a `SheetModel` through scripted events
pub struct Replayer {
    model: SheetModel,
    clock_ms: u64,
    layout_seq: u64,
}

impl Replayer {
    pub fn new(config: SheetConfig, viewport: f32) -> Self {
        Self {
            model: SheetModel::with_viewport(config, viewport),
            clock_ms: 0,
            layout_seq: 0,
        }
    }

    pub fn model(&self) -> &SheetModel {
        &self.model
    }

    /// Run a full script with a fresh model
    pub fn run_script(config: SheetConfig, script: &Script) -> Vec<ReplayStep> {
        let mut replayer = Self::new(config, script.viewport);
        script
            .events
            .iter()
            .enumerate()
            .map(|(index, event)| replayer.step(index, event))
            .collect()
    }

    /// Apply one event and report where the sheet ended up
    pub fn step(&mut self, index: usize, event: &ScriptEvent) -> ReplayStep {
        let mut animate_to = None;
        for msg in self.expand(event) {
            if let Some(cmd) = update(&mut self.model, msg) {
                animate_to = cmd.target_height().or(animate_to);
            }
        }

        ReplayStep {
            index,
            event: describe(event),
            state: self.model.state,
            height: self.model.height,
            animate_to,
        }
    }

    fn tick(&mut self, ms: u64) -> u64 {
        self.clock_ms = self.clock_ms.saturating_add(ms);
        self.clock_ms
    }

    fn expand(&mut self, event: &ScriptEvent) -> Vec<SheetMsg> {
        match *event {
            ScriptEvent::Open => vec![SheetMsg::Open],
            ScriptEvent::Close => vec![SheetMsg::Close],
            ScriptEvent::Toggle => vec![SheetMsg::ToggleExpand],
            ScriptEvent::Drag {
                from,
                to,
                duration_ms,
                steps,
            } => {
                let steps = steps.unwrap_or(DEFAULT_DRAG_STEPS).clamp(1, MAX_DRAG_STEPS);
                let mut msgs = self.drag_moves(from, to, duration_ms, steps);
                let time_ms = self.tick(duration_ms / (u64::from(steps) + 1));
                msgs.push(SheetMsg::DragEnd { y: to, time_ms });
                msgs
            }
            ScriptEvent::CancelledDrag { from, to } => {
                let mut msgs = self.drag_moves(from, to, default_drag_duration(), DEFAULT_DRAG_STEPS);
                msgs.push(SheetMsg::DragCancel);
                msgs
            }
            ScriptEvent::Gesture {
                offset_y,
                velocity_y,
            } => vec![SheetMsg::GestureEnd(GestureSample::new(offset_y, velocity_y))],
            ScriptEvent::Layout {
                viewport_height,
                keyboard_inset,
            } => {
                self.layout_seq += 1;
                vec![SheetMsg::LayoutChanged {
                    seq: self.layout_seq,
                    config: self.model.config.layout_for(viewport_height, keyboard_inset),
                }]
            }
            ScriptEvent::Key(key) => vec![SheetMsg::Key {
                key,
                target: KeyTarget::Panel,
            }],
            ScriptEvent::ToggleKey(key) => vec![SheetMsg::Key {
                key,
                target: KeyTarget::ToggleControl,
            }],
            ScriptEvent::Unmount => vec![SheetMsg::Unmount],
        }
    }

    /// Start plus evenly spaced moves; the release happens one interval later
    fn drag_moves(&mut self, from: f32, to: f32, duration_ms: u64, steps: u32) -> Vec<SheetMsg> {
        let intervals = u64::from(steps) + 1;
        let interval = duration_ms / intervals;
        let start = self.tick(0);
        let mut msgs = vec![SheetMsg::DragStart {
            y: from,
            time_ms: start,
        }];
        for i in 1..=steps {
            let t = i as f32 / intervals as f32;
            let time_ms = self.tick(interval);
            msgs.push(SheetMsg::DragMove {
                y: from + (to - from) * t,
                time_ms,
            });
        }
        msgs
    }
}

fn describe(event: &ScriptEvent) -> String {
    match event {
        ScriptEvent::Open => "open".to_string(),
        ScriptEvent::Close => "close".to_string(),
        ScriptEvent::Toggle => "toggle".to_string(),
        ScriptEvent::Drag {
            from,
            to,
            duration_ms,
            ..
        } => format!("drag {} → {} in {}ms", from, to, duration_ms),
        ScriptEvent::CancelledDrag { from, to } => format!("cancelled drag {} → {}", from, to),
        ScriptEvent::Gesture {
            offset_y,
            velocity_y,
        } => format!("gesture dy={} vy={}", offset_y, velocity_y),
        ScriptEvent::Layout {
            viewport_height,
            keyboard_inset,
        } => format!("layout {} (keyboard {})", viewport_height, keyboard_inset),
        ScriptEvent::Key(key) => format!("key {:?}", key).to_lowercase(),
        ScriptEvent::ToggleKey(key) => format!("toggle key {:?}", key).to_lowercase(),
        ScriptEvent::Unmount => "unmount".to_string(),
    }
}

/// Render steps as aligned text lines
pub fn format_text(steps: &[ReplayStep]) -> String {
    steps
        .iter()
        .map(|step| {
            let animate = step
                .animate_to
                .map(|h| format!("  (animate → {:.1})", h))
                .unwrap_or_default();
            format!(
                "{:>3}  {:<32} {:<10} {:>7.1}{}",
                step.index, step.event, step.state, step.height, animate
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render steps as a JSON array
pub fn format_json(steps: &[ReplayStep]) -> Result<String> {
    serde_json::to_string_pretty(steps).context("Failed to serialize replay output")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let yaml = r#"
viewport: 900
events:
  - open
  - drag: { from: 500, to: 300 }
  - layout: { viewport_height: 900, keyboard_inset: 300 }
  - key: escape
  - toggle_key: space
"#;
        let script = Script::from_yaml(yaml).unwrap();
        assert_eq!(script.viewport, 900.0);
        assert_eq!(script.events.len(), 5);
        assert_eq!(script.events[0], ScriptEvent::Open);
        assert_eq!(
            script.events[1],
            ScriptEvent::Drag {
                from: 500.0,
                to: 300.0,
                duration_ms: 200,
                steps: None
            }
        );
        assert_eq!(script.events[3], ScriptEvent::Key(Key::Escape));
        assert_eq!(script.events[4], ScriptEvent::ToggleKey(Key::Space));
    }

    #[test]
    fn test_oversized_drag_is_error() {
        let yaml = "events:\n  - open\n  - drag: { from: 400, to: 300, steps: 4294967295 }\n";
        let err = Script::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("events[1]"));

        let yaml = "events:\n  - drag: { from: 400, to: 300, duration_ms: 18446744073709551615 }\n";
        assert!(Script::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_max_steps_drag_replays() {
        let script = Script {
            viewport: 800.0,
            events: vec![
                ScriptEvent::Open,
                ScriptEvent::Drag {
                    from: 400.0,
                    to: 200.0,
                    duration_ms: MAX_DRAG_DURATION_MS,
                    steps: Some(MAX_DRAG_STEPS),
                },
            ],
        };
        script.validate().unwrap();
        let steps = Replayer::run_script(SheetConfig::default(), &script);
        // Slow 200px upward drag from half: ratio 0.5 steps up
        assert_eq!(steps[1].state, PanelState::Full);
    }

    #[test]
    fn test_unknown_event_is_error() {
        assert!(Script::from_yaml("events: [explode]").is_err());
    }

    #[test]
    fn test_format_text_line() {
        let steps = vec![ReplayStep {
            index: 0,
            event: "open".to_string(),
            state: PanelState::Half,
            height: 400.0,
            animate_to: Some(400.0),
        }];
        let text = format_text(&steps);
        assert!(text.contains("half       "));
        assert!(text.contains("400.0"));
        assert!(text.contains("animate → 400.0"));
    }
}
