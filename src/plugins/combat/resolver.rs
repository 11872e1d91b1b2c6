//! Combat resolver: pure reactions to this step's contacts.
//!
//! Projectile and pickup systems read `CollisionStart` with their own cursor;
//! enemy contact reads the player's ongoing `CollidingEntities`. Each system
//! handles one kind of pair. Nothing here spawns or despawns; releases,
//! deaths and spent pickups are written as state, messages or
//! `PendingDespawn` and committed later.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::lifecycle::PendingDespawn;
use crate::common::tunables::{PlayerTunables, Tunables};
use crate::plugins::enemies::{Enemy, EnemyBrain, EnemyDamage};
use crate::plugins::pickups::{collect, Pickup};
use crate::plugins::player::{DamageOutcome, Player, PlayerState};
use crate::plugins::projectiles::{Faction, PooledProjectile, Projectile, ProjectileState};

use super::contact::{is_in_layer, split};
use super::messages::{EnemyKilled, PlayerDowned};

type PlayerBody<'a> = (&'a Transform, Mut<'a, PlayerState>, Mut<'a, LinearVelocity>);

/// Route one hit through the player's damage rules and apply the result to the body.
fn hurt_player(
    player: Entity,
    (tf, mut state, mut vel): PlayerBody<'_>,
    attacker_x: f32,
    t: &PlayerTunables,
    downed: &mut MessageWriter<PlayerDowned>,
) {
    match state.receive_damage(tf.translation.x, attacker_x, t) {
        DamageOutcome::Knockback(impulse) => {
            vel.0 = impulse;
            debug!("player hit, health {}", state.vitals().health);
        }
        DamageOutcome::Died => {
            vel.0 = Vec2::ZERO;
            downed.write(PlayerDowned { player });
        }
        DamageOutcome::Ignored => {}
    }
}

pub fn resolve_projectile_hits(
    tunables: Res<Tunables>,
    mut started: MessageReader<CollisionStart>,
    q_is_projectile: Query<(), With<PooledProjectile>>,
    mut q_projectiles: Query<(&Projectile, &mut ProjectileState, &Transform), With<PooledProjectile>>,
    q_layers: Query<&CollisionLayers>,
    mut q_enemies: Query<
        (&Transform, &mut EnemyBrain, &mut LinearVelocity),
        (With<Enemy>, Without<Player>, Without<PooledProjectile>),
    >,
    mut q_player: Query<
        (&Transform, &mut PlayerState, &mut LinearVelocity),
        (With<Player>, Without<Enemy>, Without<PooledProjectile>),
    >,
    mut killed: MessageWriter<EnemyKilled>,
    mut downed: MessageWriter<PlayerDowned>,
) {
    for ev in started.read() {
        let Some((shot, other)) = split(ev, |side| q_is_projectile.contains(side.collider)) else {
            continue;
        };
        let Ok(other_layers) = q_layers.get(other.collider) else {
            continue;
        };
        let Ok((projectile, mut state, shot_tf)) = q_projectiles.get_mut(shot.collider) else {
            continue;
        };
        // Already released this step (second contact, lifespan).
        if *state != ProjectileState::Active {
            continue;
        }
        let shot_x = shot_tf.translation.x;

        if is_in_layer(other_layers, Layer::World) {
            state.release();
            continue;
        }

        match projectile.faction {
            Faction::Player if is_in_layer(other_layers, Layer::Enemy) => {
                state.release();

                let enemy = other.gameplay_owner();
                let Ok((enemy_tf, mut brain, mut vel)) = q_enemies.get_mut(enemy) else {
                    continue;
                };
                if brain.is_dead() {
                    continue;
                }

                let t = &tunables.enemy;
                let away = if enemy_tf.translation.x >= shot_x { 1.0 } else { -1.0 };
                vel.0.x = away * t.knockback_speed;
                brain.stagger(t);

                if brain.receive_damage(projectile.damage, t) == EnemyDamage::Killed {
                    killed.write(EnemyKilled {
                        enemy,
                        pos: enemy_tf.translation.truncate(),
                    });
                }
            }
            Faction::Enemy if is_in_layer(other_layers, Layer::Player) => {
                state.release();

                let player = other.gameplay_owner();
                if let Ok(body) = q_player.get_mut(player) {
                    hurt_player(player, body, shot_x, &tunables.player, &mut downed);
                }
            }
            _ => {}
        }
    }
}

/// Touching a living enemy hurts the player on every step the contact lasts.
///
/// Reads the player's current contacts rather than `CollisionStart`, so a
/// player pinned against an enemy is hit again once invulnerability ends.
pub fn resolve_enemy_contacts(
    tunables: Res<Tunables>,
    q_colliders: Query<&ColliderOf>,
    q_enemies: Query<(&Transform, &EnemyBrain), (With<Enemy>, Without<Player>)>,
    mut q_player: Query<
        (Entity, &CollidingEntities, &Transform, &mut PlayerState, &mut LinearVelocity),
        (With<Player>, Without<Enemy>),
    >,
    mut downed: MessageWriter<PlayerDowned>,
) {
    for (player, touching, tf, state, vel) in &mut q_player {
        if state.is_dead() || state.is_invulnerable() {
            continue;
        }

        let px = tf.translation.x;
        // Nearest living enemy decides the knockback side.
        let attacker_x = touching
            .iter()
            .filter_map(|&collider| {
                let owner = q_colliders.get(collider).map_or(collider, |c| c.body);
                q_enemies.get(owner).ok()
            })
            .filter(|(_, brain)| brain.is_alive())
            .map(|(enemy_tf, _)| enemy_tf.translation.x)
            .min_by(|a, b| (a - px).abs().total_cmp(&(b - px).abs()));

        if let Some(attacker_x) = attacker_x {
            hurt_player(player, (tf, state, vel), attacker_x, &tunables.player, &mut downed);
        }
    }
}

/// Player × pickup: apply, then spend the pickup whether or not it helped.
pub fn resolve_pickup_overlaps(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    q_pickups: Query<&Pickup, Without<PendingDespawn>>,
    mut q_player: Query<&mut PlayerState, With<Player>>,
    // Per-step dedupe: the despawn marker is deferred.
    mut spent: Local<HashSet<Entity>>,
) {
    spent.clear();

    for ev in started.read() {
        let Some((pickup_side, player_side)) = split(ev, |side| q_pickups.contains(side.gameplay_owner())) else {
            continue;
        };
        let Ok(mut state) = q_player.get_mut(player_side.gameplay_owner()) else {
            continue;
        };
        if state.is_dead() {
            continue;
        }

        let e = pickup_side.gameplay_owner();
        if !spent.insert(e) {
            continue;
        }
        let Ok(pickup) = q_pickups.get(e) else {
            continue;
        };

        let gained = collect(&mut state, pickup);
        debug!("{:?} pickup collected (applied: {gained})", pickup.kind);
        commands.entity(e).insert(PendingDespawn);
    }
}
