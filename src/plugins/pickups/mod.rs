//! Pickups plugin: ammo and health collectibles with a time-to-live.
//!
//! Spawned from `SpawnPickupRequest` messages, written by the timed
//! [`PickupSpawner`] and by enemy loot rolls. Collection is resolved by the
//! combat resolver; expiry is handled here.

use bevy::prelude::*;

use crate::common::state::SimSet;
use crate::common::tunables::Tunables;

pub mod components;
pub mod spawner;
pub mod systems;

pub use components::{Pickup, PickupKind};
pub use spawner::{PickupSpawner, SpawnPickupRequest};
pub use systems::collect;

pub fn plugin(app: &mut App) {
    let spawner = PickupSpawner::from_tunables(&app.world().resource::<Tunables>().spawning);

    app.insert_resource(spawner)
        .add_message::<SpawnPickupRequest>()
        .add_systems(FixedUpdate, systems::age_pickups.in_set(SimSet::Timers))
        .add_systems(
            FixedUpdate,
            (spawner::run_pickup_spawner, systems::spawn_requested_pickups)
                .chain()
                .in_set(SimSet::Spawn),
        );
}
