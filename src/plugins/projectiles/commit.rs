//! Release commit: recycle projectiles back into the pool.
//!
//! This system is the owner of the *Inactive invariants*.
//!
//! Invariant: Inactive projectiles must be:
//! - hidden
//! - velocity = 0, gravity off
//! - collide with nothing (filters empty)
//!
//! Centralizing these writes here prevents inconsistencies.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{PooledProjectile, Projectile, ProjectileState};
use super::pool::{inactive_layers, ProjectilePool};

pub fn release_commit(
    mut pool: ResMut<ProjectilePool>,
    mut q: Query<(
        Entity,
        &Projectile,
        &mut ProjectileState,
        &mut Visibility,
        &mut LinearVelocity,
        &mut GravityScale,
        &mut CollisionLayers,
    ), With<PooledProjectile>>,
) {
    for (e, projectile, mut state, mut vis, mut vel, mut gravity, mut layers) in &mut q {
        if *state != ProjectileState::PendingRelease {
            continue;
        }

        *state = ProjectileState::Inactive;
        *vis = Visibility::Hidden;
        vel.0 = Vec2::ZERO;
        gravity.0 = 0.0;
        *layers = inactive_layers(projectile.faction);

        pool.push_free(e);
    }
}
