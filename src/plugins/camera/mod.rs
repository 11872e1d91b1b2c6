//! Camera plugin (render-only).
//!
//! Side-scroller follow: the camera eases toward the player horizontally and
//! only loosely vertically, so jumps don't shake the view.
//!
//! A system cannot hold `Query<&Transform>` and `Query<&mut Transform>` at
//! once unless Bevy can prove the queries disjoint (B0001); the `Without<...>`
//! filters below are that proof.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::player::Player;

#[derive(Component)]
pub struct MainCamera {
    pub responsiveness: f32,
}

/// Vertical follow is damped by this factor relative to horizontal.
const VERTICAL_DAMPING: f32 = 0.35;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera)
        .add_systems(
            PostUpdate,
            follow_player
                .before(TransformSystems::Propagate)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera { responsiveness: 5.0 },
        FireflyConfig::default(),
        Transform::from_xyz(0.0, 0.0, 999.0),
        DespawnOnExit(GameState::InGame),
    ));
}

pub fn follow_player(
    time: Res<Time>,
    q_player: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut q_cam: Query<(&mut Transform, &MainCamera), Without<Player>>,
) {
    let Ok(tf_player) = q_player.single() else {
        return;
    };
    let Ok((mut tf_cam, cam)) = q_cam.single_mut() else {
        return;
    };

    let alpha = 1.0 - (-cam.responsiveness * time.delta_secs()).exp();

    tf_cam.translation.x += (tf_player.translation.x - tf_cam.translation.x) * alpha;
    tf_cam.translation.y += (tf_player.translation.y - tf_cam.translation.y) * alpha * VERTICAL_DAMPING;
}
