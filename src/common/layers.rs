//! Collision layers.
//!
//! Memberships never change at runtime. Enabling or disabling interaction is
//! done by rewriting filters (pool slots, dead actors), which avoids
//! structural changes on hot paths.

use avian2d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    World,
    Player,
    Enemy,
    PlayerProjectile,
    EnemyProjectile,
    Pickup,
}

/// Layers for an actor that has died: it still rests on the level geometry
/// but nothing else can touch it.
#[inline]
pub fn corpse_layers(membership: Layer) -> CollisionLayers {
    CollisionLayers::new(membership, [Layer::World])
}
