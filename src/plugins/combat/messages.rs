//! Death follow-ups written by the resolver and consumed in `SimSet::Commit`.

use bevy::prelude::*;

#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct EnemyKilled {
    pub enemy: Entity,
    /// Last position, where loot drops.
    pub pos: Vec2,
}

#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct PlayerDowned {
    pub player: Entity,
}
