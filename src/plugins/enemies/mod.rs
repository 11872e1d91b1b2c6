//! Enemies plugin: patrol / chase / attack soldiers.
//!
//! ```text
//! OnEnter(InGame):        request_initial_enemies -> SpawnEnemyRequest
//! FixedUpdate/Timers:     tick_enemies       cooldown, stagger, flash, death timer
//! FixedUpdate/Decide:     enemy_think        behaviour -> velocity, FireProjectile
//! FixedUpdate/Spawn:      run_enemy_spawner -> spawn_requested_enemies
//! FixedPostUpdate/Commit: on_enemy_killed    corpse layers, loot roll
//! PostUpdate:             present_enemies    tint, flip, animation label
//! ```
//!
//! Damage arrives from the combat resolver through [`EnemyBrain::receive_damage`].
//! A dead enemy keeps its entity until the death timer ends, then it is marked
//! `PendingDespawn` and removed in PostUpdate.

use bevy::prelude::*;

use crate::common::state::{GameState, SimSet};
use crate::common::tunables::Tunables;
use crate::plugins::player::systems::drive_player;

pub mod brain;
pub mod spawner;
pub mod systems;

pub use brain::{Behavior, EnemyBrain, EnemyDamage};
pub use spawner::{EnemySpawner, SpawnEnemyRequest};
pub use systems::Enemy;

pub fn plugin(app: &mut App) {
    let spawner = EnemySpawner::from_tunables(&app.world().resource::<Tunables>().spawning);

    app.insert_resource(spawner)
        .add_message::<SpawnEnemyRequest>()
        .add_systems(OnEnter(GameState::InGame), spawner::request_initial_enemies)
        .add_systems(FixedUpdate, systems::tick_enemies.in_set(SimSet::Timers))
        .add_systems(
            FixedUpdate,
            systems::enemy_think.in_set(SimSet::Decide).after(drive_player),
        )
        .add_systems(
            FixedUpdate,
            (spawner::run_enemy_spawner, systems::spawn_requested_enemies)
                .chain()
                .in_set(SimSet::Spawn),
        )
        .add_systems(FixedPostUpdate, systems::on_enemy_killed.in_set(SimSet::Commit))
        .add_systems(
            PostUpdate,
            systems::present_enemies.run_if(in_state(GameState::InGame)),
        );
}
