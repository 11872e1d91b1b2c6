//! Lifespan countdown for in-flight projectiles.

use bevy::prelude::*;

use super::components::{PooledProjectile, Projectile, ProjectileState};

/// Tick every active projectile; release the ones whose lifespan ran out.
pub fn age_projectiles(
    time: Res<Time<Fixed>>,
    mut q: Query<(&mut Projectile, &mut ProjectileState), With<PooledProjectile>>,
) {
    let dt = time.delta();

    for (mut projectile, mut state) in &mut q {
        if *state != ProjectileState::Active {
            continue;
        }
        if projectile.lifespan.tick(dt).is_finished() {
            state.release();
        }
    }
}
