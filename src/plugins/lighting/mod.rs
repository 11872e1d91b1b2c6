//! Lighting plugin (Firefly) (render-only).
//!
//! A light that follows the player, a small glow on every pickup, and
//! shadow-casting occluders on enemies.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::enemies::Enemy;
use crate::plugins::pickups::{Pickup, PickupKind};
use crate::plugins::player::Player;

#[derive(Component)]
pub struct PlayerLight;

const ENEMY_OCCLUDER_RADIUS: f32 = 20.0;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(OnEnter(GameState::InGame), setup)
        .add_systems(
            Update,
            (follow_player_light, light_new_pickups, occlude_new_enemies)
                .run_if(in_state(GameState::InGame)),
        );
}

fn setup(mut commands: Commands) {
    commands.spawn((
        Name::new("PlayerLight"),
        PlayerLight,
        PointLight2d {
            color: Color::srgb(1.0, 0.9, 0.75),
            range: 450.0,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 10.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn follow_player_light(
    q_player: Query<&Transform, (With<Player>, Without<PlayerLight>)>,
    mut q_light: Query<&mut Transform, (With<PlayerLight>, Without<Player>)>,
) {
    let Ok(tf_player) = q_player.single() else {
        return;
    };
    let Ok(mut tf_light) = q_light.single_mut() else {
        return;
    };

    tf_light.translation.x = tf_player.translation.x;
    tf_light.translation.y = tf_player.translation.y;
}

/// Glow as a child, so it leaves with the pickup.
fn light_new_pickups(mut commands: Commands, q: Query<(Entity, &Pickup), Added<Pickup>>) {
    for (e, pickup) in &q {
        let color = match pickup.kind {
            PickupKind::Ammo => Color::srgb(1.0, 0.85, 0.3),
            PickupKind::Health => Color::srgb(0.4, 1.0, 0.5),
        };
        commands.entity(e).with_child((
            PointLight2d {
                color,
                range: 90.0,
                ..default()
            },
            Transform::default(),
        ));
    }
}

fn occlude_new_enemies(mut commands: Commands, q: Query<Entity, Added<Enemy>>) {
    for e in &q {
        commands.entity(e).try_insert(Occluder2d::circle(ENEMY_OCCLUDER_RADIUS));
    }
}
