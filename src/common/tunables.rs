//! Tunable gameplay constants.
//!
//! Everything is in pixels, seconds and pixels-per-second. The core plugin
//! uses `init_resource`, so inserting a `Tunables` before registering the
//! plugins overrides these defaults (tests rely on that).

use std::time::Duration;

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    /// Downward acceleration applied by the physics collaborator.
    pub gravity: f32,
    /// Seed for loot rolls.
    pub loot_seed: u64,
    pub player: PlayerTunables,
    pub enemy: EnemyTunables,
    pub projectile: ProjectileTunables,
    pub pickup: PickupTunables,
    pub spawning: SpawnTunables,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            gravity: 600.0,
            loot_seed: 0x5EED_1007,
            player: PlayerTunables::default(),
            enemy: EnemyTunables::default(),
            projectile: ProjectileTunables::default(),
            pickup: PickupTunables::default(),
            spawning: SpawnTunables::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayerTunables {
    pub max_health: u32,
    pub max_stamina: f32,
    pub max_ammo: u32,
    pub walk_speed: f32,
    pub run_speed: f32,
    /// Stamina per second while not running.
    pub stamina_regen: f32,
    /// Stamina per second while running and moving.
    pub run_drain: f32,
    pub jump_cost: f32,
    pub jump_speed: f32,
    /// Horizontal/vertical knockback speed on an accepted hit.
    pub knockback: Vec2,
    pub invulnerable_secs: f32,
    pub shoot_secs: f32,
    pub reload_secs: f32,
    pub heal_secs: f32,
    pub heal_amount: u32,
    /// Above this horizontal speed the player animates as running.
    pub run_anim_threshold: f32,
    /// Muzzle offset for a right-facing player; x is mirrored when facing left.
    pub muzzle_offset: Vec2,
    pub shot_speed: f32,
    pub shot_damage: i32,
    pub spawn_point: Vec2,
}

impl Default for PlayerTunables {
    fn default() -> Self {
        Self {
            max_health: 3,
            max_stamina: 100.0,
            max_ammo: 30,
            walk_speed: 100.0,
            run_speed: 250.0,
            stamina_regen: 18.0,
            run_drain: 30.0,
            jump_cost: 20.0,
            jump_speed: 330.0,
            knockback: Vec2::new(200.0, 200.0),
            invulnerable_secs: 1.0,
            shoot_secs: 0.25,
            reload_secs: 1.2,
            heal_secs: 1.0,
            heal_amount: 1,
            run_anim_threshold: 110.0,
            muzzle_offset: Vec2::new(30.0, 12.0),
            shot_speed: 900.0,
            shot_damage: 1,
            spawn_point: Vec2::new(-320.0, -120.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EnemyTunables {
    pub max_health: i32,
    pub vision_range: f32,
    pub attack_range: f32,
    pub patrol_speed: f32,
    pub chase_speed: f32,
    pub patrol_half_width: f32,
    pub fire_rate_secs: f32,
    pub shot_speed: f32,
    pub shot_damage: i32,
    /// Vertical offset of the enemy muzzle above its centre.
    pub muzzle_height: f32,
    pub hit_flash_secs: f32,
    /// Window after a projectile hit during which behaviour leaves velocity alone.
    pub stagger_secs: f32,
    pub knockback_speed: f32,
    pub death_secs: f32,
    /// Probability in [0, 1] that a dying enemy drops a pickup.
    pub loot_chance: f64,
}

impl Default for EnemyTunables {
    fn default() -> Self {
        Self {
            max_health: 3,
            vision_range: 250.0,
            attack_range: 120.0,
            patrol_speed: 50.0,
            chase_speed: 80.0,
            patrol_half_width: 100.0,
            fire_rate_secs: 1.5,
            shot_speed: 400.0,
            shot_damage: 1,
            muzzle_height: 10.0,
            hit_flash_secs: 0.1,
            stagger_secs: 0.2,
            knockback_speed: 150.0,
            death_secs: 0.6,
            loot_chance: 0.3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProjectileTunables {
    /// Fixed pool size; the pool never grows.
    pub capacity: usize,
    pub lifespan_secs: f32,
}

impl Default for ProjectileTunables {
    fn default() -> Self {
        Self { capacity: 64, lifespan_secs: 2.0 }
    }
}

#[derive(Debug, Clone)]
pub struct PickupTunables {
    pub ttl_secs: f32,
    pub ammo_amount: u32,
    pub health_amount: u32,
    pub radius: f32,
}

impl Default for PickupTunables {
    fn default() -> Self {
        Self { ttl_secs: 15.0, ammo_amount: 30, health_amount: 1, radius: 25.0 }
    }
}

/// Timed spawners. `None` disables the timer; request messages still work.
#[derive(Debug, Clone)]
pub struct SpawnTunables {
    pub initial_enemies: Vec<Vec2>,
    pub enemy_interval_secs: Option<f32>,
    pub enemy_points: Vec<Vec2>,
    pub max_enemies: usize,
    pub pickup_interval_secs: Option<f32>,
    pub pickup_points: Vec<Vec2>,
}

impl Default for SpawnTunables {
    fn default() -> Self {
        Self {
            initial_enemies: vec![Vec2::new(150.0, -120.0), Vec2::new(450.0, -120.0)],
            enemy_interval_secs: Some(6.0),
            enemy_points: vec![Vec2::new(-500.0, -120.0), Vec2::new(500.0, -120.0)],
            max_enemies: 4,
            pickup_interval_secs: Some(12.0),
            pickup_points: vec![Vec2::new(-120.0, -140.0), Vec2::new(260.0, 20.0)],
        }
    }
}

impl SpawnTunables {
    /// No initial enemies, no timed spawns.
    pub fn disabled() -> Self {
        Self {
            initial_enemies: Vec::new(),
            enemy_interval_secs: None,
            enemy_points: Vec::new(),
            max_enemies: 0,
            pickup_interval_secs: None,
            pickup_points: Vec::new(),
        }
    }
}

#[inline]
pub fn secs(s: f32) -> Duration {
    Duration::from_secs_f32(s.max(0.0))
}
