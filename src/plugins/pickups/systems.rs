use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::Layer;
use crate::common::lifecycle::PendingDespawn;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::player::PlayerState;

use super::components::{Pickup, PickupKind};
use super::spawner::SpawnPickupRequest;

const AMMO_COLOR: Color = Color::srgb(0.95, 0.8, 0.2);
const HEALTH_COLOR: Color = Color::srgb(0.3, 0.9, 0.4);
const ICON: f32 = 32.0;

/// Pickups only ever overlap the player.
#[inline]
pub fn pickup_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Pickup, [Layer::Player])
}

/// Apply `pickup` to `player`. The pickup is spent either way; the return
/// value only says whether the player gained anything.
pub fn collect(player: &mut PlayerState, pickup: &Pickup) -> bool {
    player.collect(pickup.kind, pickup.amount)
}

pub fn spawn_requested_pickups(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut requests: MessageReader<SpawnPickupRequest>,
) {
    let t = &tunables.pickup;

    for req in requests.read() {
        let color = match req.kind {
            PickupKind::Ammo => AMMO_COLOR,
            PickupKind::Health => HEALTH_COLOR,
        };

        commands.spawn((
            Name::new(format!("Pickup({:?})", req.kind)),
            Pickup::new(req.kind, t),
            Sprite {
                color,
                custom_size: Some(Vec2::splat(ICON)),
                ..default()
            },
            Transform::from_translation(req.pos.extend(1.5)),
            RigidBody::Static,
            // Hitbox is larger than the icon.
            Collider::circle(t.radius),
            Sensor,
            pickup_layers(),
            CollisionEventsEnabled,
            DespawnOnExit(GameState::InGame),
        ));
    }
}

pub fn age_pickups(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    mut q: Query<(Entity, &mut Pickup), Without<PendingDespawn>>,
) {
    let dt = time.delta();
    for (e, mut pickup) in &mut q {
        if pickup.tick(dt) {
            debug!("{:?} pickup expired", pickup.kind);
            commands.entity(e).insert(PendingDespawn);
        }
    }
}
