//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host should perform after an update:
//! animating the panel, mirroring ARIA state, and moving focus.

use serde::{Deserialize, Serialize};

use crate::sheet::AriaAttributes;

/// How the host animates a height change
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnimationSpec {
    /// Spring physics, framer-motion style
    Spring { stiffness: f32, damping: f32 },
    /// Fixed-duration ease-out
    Eased { duration_ms: u32 },
}

impl Default for AnimationSpec {
    fn default() -> Self {
        AnimationSpec::Spring {
            stiffness: 300.0,
            damping: 30.0,
        }
    }
}

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Re-render without a height change
    Redraw,
    /// Animate the panel from one height to another
    AnimateHeight {
        from: f32,
        to: f32,
        animation: AnimationSpec,
    },
    /// Apply accessibility attributes for the new state
    SetAria(AriaAttributes),
    /// Move keyboard focus into the panel
    FocusPanel,
    /// Return focus to whatever opened the panel
    RestoreFocus,
    /// Several commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Combine commands, flattening away empty and single-element batches
    pub fn batch(cmds: Vec<Cmd>) -> Option<Cmd> {
        let mut flat = Vec::with_capacity(cmds.len());
        for cmd in cmds {
            match cmd {
                Cmd::Batch(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => None,
            1 => flat.pop(),
            _ => Some(Cmd::Batch(flat)),
        }
    }

    /// Iterate the leaf commands in order
    pub fn iter(&self) -> Box<dyn Iterator<Item = &Cmd> + '_> {
        match self {
            Cmd::Batch(cmds) => Box::new(cmds.iter().flat_map(|c| c.iter())),
            other => Box::new(std::iter::once(other)),
        }
    }

    /// Target height, if this command (or a batched one) animates the panel
    pub fn target_height(&self) -> Option<f32> {
        self.iter().find_map(|cmd| match cmd {
            Cmd::AnimateHeight { to, .. } => Some(*to),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_flattens() {
        assert_eq!(Cmd::batch(vec![]), None);
        assert_eq!(Cmd::batch(vec![Cmd::Redraw]), Some(Cmd::Redraw));

        let cmd = Cmd::batch(vec![
            Cmd::Batch(vec![Cmd::Redraw, Cmd::FocusPanel]),
            Cmd::RestoreFocus,
        ])
        .unwrap();
        assert_eq!(
            cmd,
            Cmd::Batch(vec![Cmd::Redraw, Cmd::FocusPanel, Cmd::RestoreFocus])
        );
    }

    #[test]
    fn test_target_height() {
        let cmd = Cmd::Batch(vec![
            Cmd::Redraw,
            Cmd::AnimateHeight {
                from: 0.0,
                to: 300.0,
                animation: AnimationSpec::default(),
            },
        ]);
        assert_eq!(cmd.target_height(), Some(300.0));
        assert_eq!(Cmd::Redraw.target_height(), None);
    }

    #[test]
    fn test_animation_spec_yaml() {
        let animation: AnimationSpec = serde_yaml::from_str("type: eased\nduration_ms: 250").unwrap();
        assert_eq!(animation, AnimationSpec::Eased { duration_ms: 250 });
    }
}
