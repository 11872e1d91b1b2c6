//! Read-only per-tick view of the player's resources for UI collaborators.

use bevy::prelude::*;

use crate::plugins::player::{Player, PlayerState};

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct HudSnapshot {
    pub health: u32,
    pub max_health: u32,
    pub ammo: u32,
    pub max_ammo: u32,
    pub stamina: f32,
    pub max_stamina: f32,
    pub dead: bool,
}

impl HudSnapshot {
    pub fn from_player(state: &PlayerState) -> Self {
        let v = state.vitals();
        Self {
            health: v.health,
            max_health: v.max_health,
            ammo: v.ammo,
            max_ammo: v.max_ammo,
            stamina: v.stamina,
            max_stamina: v.max_stamina,
            dead: state.is_dead(),
        }
    }

    /// `value / max` in [0, 1]; an empty maximum reads as empty.
    #[inline]
    pub fn fraction(value: f32, max: f32) -> f32 {
        if max <= 0.0 { 0.0 } else { (value / max).clamp(0.0, 1.0) }
    }

    pub fn health_fraction(&self) -> f32 {
        Self::fraction(self.health as f32, self.max_health as f32)
    }

    pub fn ammo_fraction(&self) -> f32 {
        Self::fraction(self.ammo as f32, self.max_ammo as f32)
    }

    pub fn stamina_fraction(&self) -> f32 {
        Self::fraction(self.stamina, self.max_stamina)
    }
}

pub fn publish_hud(q: Query<&PlayerState, With<Player>>, mut hud: ResMut<HudSnapshot>) {
    let Ok(state) = q.single() else {
        return;
    };
    hud.set_if_neq(HudSnapshot::from_player(state));
}
