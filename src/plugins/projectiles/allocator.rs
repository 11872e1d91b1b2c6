//! Fire-request consumer: activate projectiles from the pool.
//!
//! Pool exhaustion is a capacity decision, not a failure: the request is
//! dropped and whatever the producer already paid (ammo, cooldown) stays paid.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::messages::FireProjectile;
use super::pool::{acquire, ProjectilePool, SlotQuery};

pub fn allocate_projectiles(
    tunables: Res<Tunables>,
    mut pool: ResMut<ProjectilePool>,
    mut requests: MessageReader<FireProjectile>,
    mut slots: SlotQuery,
) {
    let lifespan = tunables.projectile.lifespan_secs;

    for req in requests.read() {
        if acquire(&mut pool, &mut slots, req, lifespan).is_none() {
            debug!(
                "projectile pool exhausted ({} active); {:?} shot dropped",
                pool.active_len(),
                req.faction
            );
        }
    }
}
