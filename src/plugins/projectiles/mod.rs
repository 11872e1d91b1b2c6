//! Projectiles plugin: message-based producer -> consumer firing over a
//! fixed-size, pre-spawned pool.
//!
//! # Data flow
//! ```text
//! FixedUpdate
//!   Timers:  age_projectiles        lifespan tick, Active -> PendingRelease
//!            release_commit         expired slots back on the free list
//!   Decide:  player / enemy systems write FireProjectile messages
//!   Spawn:   allocate_projectiles   pop free slot, write Active components
//!                                   (pool empty -> request dropped)
//! (avian physics, CollisionStart)
//! FixedPostUpdate
//!   Resolve: combat resolver        hit -> PendingRelease
//!   Commit:  release_commit         PendingRelease -> Inactive, push free
//! ```
//!
//! Producers never borrow the pool. The allocator is its only popper and the
//! commit its only pusher, so the free list can't hold a slot twice. The
//! commit also runs right after aging: expired slots are inert before the
//! physics step and reusable by the same tick's allocator.

pub mod allocator;
pub mod commit;
pub mod components;
pub mod lifetime;
pub mod messages;
pub mod pool;

use bevy::prelude::*;

use crate::common::state::SimSet;
use crate::common::tunables::Tunables;

pub use components::{Faction, PooledProjectile, Projectile, ProjectileState};
pub use messages::FireProjectile;
pub use pool::ProjectilePool;

pub fn plugin(app: &mut App) {
    let capacity = app.world().resource::<Tunables>().projectile.capacity;

    app.insert_resource(ProjectilePool::new(capacity))
        .add_message::<FireProjectile>()
        .add_systems(Startup, pool::init_projectile_pool)
        .add_systems(
            FixedUpdate,
            (lifetime::age_projectiles, commit::release_commit)
                .chain()
                .in_set(SimSet::Timers),
        )
        .add_systems(FixedUpdate, allocator::allocate_projectiles.in_set(SimSet::Spawn))
        .add_systems(FixedPostUpdate, commit::release_commit.in_set(SimSet::Commit));
}

#[cfg(test)]
mod tests;
