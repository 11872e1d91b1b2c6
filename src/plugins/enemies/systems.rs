use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::animation::AnimationLabel;
use crate::common::layers::{corpse_layers, Layer};
use crate::common::lifecycle::PendingDespawn;
use crate::common::motion::{aim_angle, Facing};
use crate::common::rng::LootRng;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::combat::messages::EnemyKilled;
use crate::plugins::pickups::{PickupKind, SpawnPickupRequest};
use crate::plugins::player::{Player, PlayerState};
use crate::plugins::projectiles::messages::FireProjectile;

use super::brain::EnemyBrain;
use super::spawner::SpawnEnemyRequest;

const BODY: Vec2 = Vec2::new(40.0, 60.0);
const COLOR_ALIVE: Color = Color::srgb(1.0, 0.33, 0.33);
const COLOR_FLASH: Color = Color::WHITE;
const COLOR_DEAD: Color = Color::srgb(0.85, 0.85, 0.85);

#[derive(Component)]
pub struct Enemy;

/// Enemies collide with the level, the player and player shots.
#[inline]
pub fn enemy_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [Layer::World, Layer::Player, Layer::PlayerProjectile])
}

pub fn spawn_requested_enemies(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut requests: MessageReader<SpawnEnemyRequest>,
) {
    for req in requests.read() {
        commands.spawn((
            Name::new("Enemy"),
            Enemy,
            EnemyBrain::new(req.pos.x, &tunables.enemy),
            AnimationLabel::default(),
            Sprite {
                color: COLOR_ALIVE,
                custom_size: Some(BODY),
                ..default()
            },
            Transform::from_translation(req.pos.extend(1.0)),
            (
                RigidBody::Dynamic,
                Collider::rectangle(BODY.x, BODY.y),
                LockedAxes::ROTATION_LOCKED,
                Friction::ZERO,
                enemy_layers(),
                LinearVelocity::ZERO,
                CollisionEventsEnabled,
            ),
            DespawnOnExit(GameState::InGame),
        ));
    }
}

/// Countdowns; the death timer ending hands the enemy to deferred despawn.
pub fn tick_enemies(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    mut q: Query<(Entity, &mut EnemyBrain), (With<Enemy>, Without<PendingDespawn>)>,
) {
    let dt = time.delta();
    for (e, mut brain) in &mut q {
        if brain.tick(dt) {
            commands.entity(e).insert(PendingDespawn);
        }
    }
}

pub fn enemy_think(
    tunables: Res<Tunables>,
    q_player: Query<(&Transform, &PlayerState), (With<Player>, Without<Enemy>)>,
    mut q: Query<(&Transform, &mut EnemyBrain, &mut LinearVelocity), With<Enemy>>,
    mut fire: MessageWriter<FireProjectile>,
) {
    let t = &tunables.enemy;
    let (player_pos, player_alive) = match q_player.single() {
        Ok((tf, state)) => (tf.translation.truncate(), state.is_alive()),
        Err(_) => (Vec2::ZERO, false),
    };

    for (tf, mut brain, mut vel) in &mut q {
        let pos = tf.translation.truncate();
        let cmd = brain.think(pos, player_pos, player_alive, t);

        if let Some(vx) = cmd.velocity_x {
            vel.0.x = vx;
        }
        if let Some(target) = cmd.fire_at {
            let origin = pos + Vec2::new(0.0, t.muzzle_height);
            fire.write(FireProjectile::from_enemy(origin, aim_angle(origin, target), t));
        }
    }
}

/// Death follow-up: freeze, stop interacting, roll for loot.
pub fn on_enemy_killed(
    tunables: Res<Tunables>,
    mut killed: MessageReader<EnemyKilled>,
    mut rng: ResMut<LootRng>,
    mut q: Query<(&mut LinearVelocity, &mut CollisionLayers), With<Enemy>>,
    mut loot: MessageWriter<SpawnPickupRequest>,
) {
    for msg in killed.read() {
        if let Ok((mut vel, mut layers)) = q.get_mut(msg.enemy) {
            vel.0.x = 0.0;
            *layers = corpse_layers(Layer::Enemy);
        }

        if rng.roll(tunables.enemy.loot_chance) {
            let kind = if rng.roll(0.5) { PickupKind::Ammo } else { PickupKind::Health };
            info!("enemy killed at {}, dropping {kind:?}", msg.pos);
            loot.write(SpawnPickupRequest { kind, pos: msg.pos });
        } else {
            info!("enemy killed at {}", msg.pos);
        }
    }
}

pub fn present_enemies(
    mut q: Query<(&EnemyBrain, &LinearVelocity, &mut AnimationLabel, &mut Sprite), With<Enemy>>,
) {
    for (brain, vel, mut label, mut sprite) in &mut q {
        label.set_if_neq(AnimationLabel(brain.animation(vel.0.x).label()));

        sprite.flip_x = brain.facing() == Facing::Left;
        sprite.color = if brain.is_dead() {
            COLOR_DEAD
        } else if brain.is_flashing() {
            COLOR_FLASH
        } else {
            COLOR_ALIVE
        };
    }
}
