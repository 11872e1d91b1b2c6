//! Deferred removal.
//!
//! We avoid despawning physics entities inside the fixed step. Systems mark
//! `PendingDespawn` and a single PostUpdate system performs the structural change.

use bevy::prelude::*;

/// Marker: entity should be removed from the world.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;

pub fn despawn_pending(mut commands: Commands, q: Query<Entity, With<PendingDespawn>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
