//! World plugin: level geometry (ground, ledges, side walls).
//!
//! Everything here is a static body on the `World` layer. Projectiles that
//! touch it are released; the player's ground probe only sees this layer.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::Layer;
use crate::common::state::GameState;

const HALF_W: f32 = 640.0;
const GROUND_Y: f32 = -180.0;
const THICKNESS: f32 = 30.0;
const WALL_HEIGHT: f32 = 720.0;

/// Ledges as (centre, size).
const LEDGES: [(Vec2, Vec2); 3] = [
    (Vec2::new(-260.0, -60.0), Vec2::new(180.0, 16.0)),
    (Vec2::new(60.0, 0.0), Vec2::new(160.0, 16.0)),
    (Vec2::new(320.0, -80.0), Vec2::new(200.0, 16.0)),
];

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), (spawn_level, spawn_backdrop));
}

#[inline]
pub fn world_layers() -> CollisionLayers {
    CollisionLayers::new(
        Layer::World,
        [
            Layer::Player,
            Layer::Enemy,
            Layer::PlayerProjectile,
            Layer::EnemyProjectile,
            Layer::Pickup,
        ],
    )
}

fn spawn_level(mut commands: Commands) {
    let ground_color = Color::srgb(0.25, 0.27, 0.33);
    let ledge_color = Color::srgb(0.32, 0.3, 0.36);

    let mut spawn_block = |name: String, pos: Vec2, size: Vec2, color: Color| {
        commands.spawn((
            Name::new(name),
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(pos.extend(0.5)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            world_layers(),
            DespawnOnExit(GameState::InGame),
        ));
    };

    spawn_block(
        "Ground".into(),
        Vec2::new(0.0, GROUND_Y - THICKNESS * 0.5),
        Vec2::new(HALF_W * 2.0 + THICKNESS * 2.0, THICKNESS),
        ground_color,
    );
    spawn_block(
        "WallLeft".into(),
        Vec2::new(-HALF_W - THICKNESS * 0.5, GROUND_Y + WALL_HEIGHT * 0.5),
        Vec2::new(THICKNESS, WALL_HEIGHT),
        ground_color,
    );
    spawn_block(
        "WallRight".into(),
        Vec2::new(HALF_W + THICKNESS * 0.5, GROUND_Y + WALL_HEIGHT * 0.5),
        Vec2::new(THICKNESS, WALL_HEIGHT),
        ground_color,
    );

    for (i, (pos, size)) in LEDGES.into_iter().enumerate() {
        spawn_block(format!("Ledge{i}"), pos, size, ledge_color);
    }
}

/// Non-colliding sky bands so the scroll reads.
fn spawn_backdrop(mut commands: Commands) {
    (0..8).for_each(|i| {
        let x = -HALF_W + 80.0 + i as f32 * 160.0;
        let color = if i % 2 == 0 {
            Color::srgb(0.1, 0.11, 0.15)
        } else {
            Color::srgb(0.08, 0.09, 0.12)
        };

        commands.spawn((
            Sprite::from_color(color, Vec2::new(160.0, WALL_HEIGHT)),
            Transform::from_xyz(x, GROUND_Y + WALL_HEIGHT * 0.5, -1.0),
            DespawnOnExit(GameState::InGame),
        ));
    });
}

#[cfg(test)]
mod tests;
