use std::time::Duration;

use bevy::prelude::*;

/// Marker for the fixed set of pre-spawned projectile slots.
#[derive(Component)]
pub struct PooledProjectile;

/// Slot lifecycle.
///
/// `PendingRelease` exists so that any system may release a projectile while
/// only the commit system writes the inactive invariants and touches the free list.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectileState {
    #[default]
    Inactive,
    Active,
    PendingRelease,
}

impl ProjectileState {
    /// Request release. Idempotent: only an active slot changes.
    #[inline]
    pub fn release(&mut self) -> bool {
        if *self == ProjectileState::Active {
            *self = ProjectileState::PendingRelease;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Faction {
    #[default]
    Player,
    Enemy,
}

#[derive(Component, Debug, Clone)]
pub struct Projectile {
    pub faction: Faction,
    pub damage: i32,
    pub speed: f32,
    pub gravity: bool,
    pub lifespan: Timer,
}

impl Default for Projectile {
    fn default() -> Self {
        Self {
            faction: Faction::Player,
            damage: 1,
            speed: 0.0,
            gravity: false,
            lifespan: Timer::new(Duration::ZERO, TimerMode::Once),
        }
    }
}

impl Projectile {
    #[inline]
    pub fn reset_for_fire(&mut self, faction: Faction, damage: i32, speed: f32, gravity: bool, lifespan: Duration) {
        self.faction = faction;
        self.damage = damage;
        self.speed = speed;
        self.gravity = gravity;
        self.lifespan = Timer::new(lifespan, TimerMode::Once);
    }
}
