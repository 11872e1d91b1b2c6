//! Buffered fire requests.
//!
//! Producers (player intent resolution, enemy behaviour) create *intent*; the
//! allocator is the single consumer that pops the pool and writes components.

use bevy::prelude::*;

use crate::common::tunables::{EnemyTunables, PlayerTunables};
use crate::plugins::player::state::Shot;

use super::components::Faction;

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct FireProjectile {
    pub faction: Faction,
    pub origin: Vec2,
    /// Heading in radians.
    pub angle: f32,
    pub speed: f32,
    pub gravity: bool,
    pub damage: i32,
}

impl FireProjectile {
    pub fn from_player(shot: Shot, t: &PlayerTunables) -> Self {
        Self {
            faction: Faction::Player,
            origin: shot.origin,
            angle: shot.angle,
            speed: t.shot_speed,
            gravity: false,
            damage: t.shot_damage,
        }
    }

    /// Enemy shots are slower than the player's and ignore gravity.
    pub fn from_enemy(origin: Vec2, angle: f32, t: &EnemyTunables) -> Self {
        Self {
            faction: Faction::Enemy,
            origin,
            angle,
            speed: t.shot_speed,
            gravity: false,
            damage: t.shot_damage,
        }
    }
}
