use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::animation::AnimationLabel;
use crate::common::layers::{corpse_layers, Layer};
use crate::common::motion::Facing;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::combat::messages::PlayerDowned;
use crate::plugins::projectiles::messages::FireProjectile;

use super::input::PlayerIntent;
use super::state::{MoveIntent, PlayerState, ShotOutcome};

const BODY: Vec2 = Vec2::new(40.0, 60.0);
const COLOR_ALIVE: Color = Color::srgb(0.2, 0.75, 0.9);
const COLOR_HURT: Color = Color::srgb(1.0, 0.2, 0.2);
const COLOR_DEAD: Color = Color::srgb(0.35, 0.35, 0.4);

#[derive(Component)]
pub struct Player;

/// Ground contact reported by the physics probe.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Grounded(pub bool);

fn player_layers() -> CollisionLayers {
    CollisionLayers::new(
        Layer::Player,
        [Layer::World, Layer::Enemy, Layer::EnemyProjectile, Layer::Pickup],
    )
}

/// Short downward shape cast from the feet, against level geometry only.
fn ground_probe() -> ShapeCaster {
    ShapeCaster::new(
        Collider::rectangle(BODY.x - 4.0, 2.0),
        Vec2::new(0.0, -BODY.y * 0.5),
        0.0,
        Dir2::NEG_Y,
    )
    .with_max_distance(3.0)
    .with_max_hits(1)
    .with_query_filter(SpatialQueryFilter::from_mask(Layer::World))
}

pub fn spawn_player(mut commands: Commands, tunables: Res<Tunables>) {
    let t = &tunables.player;

    commands.spawn((
        Name::new("Player"),
        Player,
        PlayerState::new(t),
        Grounded::default(),
        AnimationLabel::default(),
        Sprite {
            color: COLOR_ALIVE,
            custom_size: Some(BODY),
            ..default()
        },
        Transform::from_translation(t.spawn_point.extend(1.0)),
        (
            RigidBody::Dynamic,
            Collider::rectangle(BODY.x, BODY.y),
            LockedAxes::ROTATION_LOCKED,
            Friction::ZERO,
            player_layers(),
            LinearVelocity::ZERO,
            // Opt-in: Avian only emits CollisionStart if one collider has this marker.
            CollisionEventsEnabled,
            // Ongoing contacts, for damage that repeats while touching an enemy.
            CollidingEntities::default(),
            ground_probe(),
        ),
        DespawnOnExit(GameState::InGame),
    ));
}

pub fn update_grounded(mut q: Query<(&ShapeHits, &LinearVelocity, &mut Grounded), With<Player>>) {
    for (hits, vel, mut grounded) in &mut q {
        // Rising bodies are never grounded, even while the probe still touches the floor.
        grounded.0 = vel.0.y <= 1.0 && hits.iter().next().is_some();
    }
}

pub fn tick_player_timers(time: Res<Time<Fixed>>, mut q: Query<&mut PlayerState, With<Player>>) {
    let dt = time.delta();
    for mut state in &mut q {
        state.tick(dt);
    }
}

/// Resolve this tick's intents: heal, reload, shoot, then movement.
pub fn drive_player(
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    mut intent: ResMut<PlayerIntent>,
    mut q: Query<(&mut PlayerState, &mut LinearVelocity, &Transform, &Grounded), With<Player>>,
    mut fire: MessageWriter<FireProjectile>,
) {
    // Edges are consumed even without a player so they can't fire later.
    let edges = intent.take_edges();

    let Ok((mut state, mut vel, tf, grounded)) = q.single_mut() else {
        return;
    };
    let t = &tunables.player;

    if edges.heal {
        state.request_heal(t);
    }
    if edges.reload {
        state.request_reload(t);
    }
    if let Some(target) = edges.shoot_at {
        match state.request_shoot(tf.translation.truncate(), target, t) {
            ShotOutcome::Fired(shot) => {
                fire.write(FireProjectile::from_player(shot, t));
            }
            ShotOutcome::Reload { started } => {
                debug!("magazine empty, reload started: {started}");
            }
            ShotOutcome::Ignored => {}
        }
    }

    let movement = MoveIntent {
        axis: intent.move_axis,
        run: intent.run_held,
        jump: edges.jump,
    };
    if let Some(req) = state.apply_movement(movement, grounded.0, time.delta_secs(), t) {
        vel.0.x = req.velocity_x;
        if let Some(vy) = req.jump_velocity {
            vel.0.y = vy;
        }
    }
}

/// Dead players stop moving and stop interacting with anything but the level.
pub fn on_player_downed(
    mut downed: MessageReader<PlayerDowned>,
    mut q: Query<(&mut LinearVelocity, &mut CollisionLayers), With<Player>>,
) {
    for msg in downed.read() {
        let Ok((mut vel, mut layers)) = q.get_mut(msg.player) else {
            continue;
        };
        vel.0 = Vec2::ZERO;
        *layers = corpse_layers(Layer::Player);
        info!("player downed");
    }
}

pub fn present_player(
    tunables: Res<Tunables>,
    mut q: Query<(&PlayerState, &LinearVelocity, &mut AnimationLabel, &mut Sprite), With<Player>>,
) {
    for (state, vel, mut label, mut sprite) in &mut q {
        let anim = state.animation(vel.0.x, &tunables.player);
        label.set_if_neq(AnimationLabel(anim.label()));

        sprite.flip_x = state.facing() == Facing::Left;
        sprite.color = if state.is_dead() {
            COLOR_DEAD
        } else if state.is_invulnerable() {
            COLOR_HURT
        } else {
            COLOR_ALIVE
        };
    }
}
