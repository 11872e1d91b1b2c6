use bevy::prelude::*;

/// Current animation clip name for the rendering collaborator.
///
/// Derived every frame from gameplay state; never read back by the simulation.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationLabel(pub &'static str);

impl Default for AnimationLabel {
    fn default() -> Self {
        Self("idle")
    }
}
