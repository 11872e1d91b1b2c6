//! Input collaborator: raw keyboard/mouse -> discrete player intents.
//!
//! Runs in `Update` (variable dt). Level-triggered values (move axis, run)
//! are overwritten every frame; edge-triggered requests are latched until the
//! next fixed tick consumes them, so a press is never lost or applied twice
//! when frames and fixed ticks don't line up.

use bevy::prelude::*;

use crate::plugins::camera::MainCamera;

#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct PlayerIntent {
    pub move_axis: f32,
    pub run_held: bool,
    pub jump_requested: bool,
    pub shoot_at: Option<Vec2>,
    pub reload_pressed: bool,
    pub heal_pressed: bool,
}

/// Edge-triggered requests taken out of [`PlayerIntent`] for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntentEdges {
    pub jump: bool,
    pub shoot_at: Option<Vec2>,
    pub reload: bool,
    pub heal: bool,
}

impl PlayerIntent {
    pub fn take_edges(&mut self) -> IntentEdges {
        IntentEdges {
            jump: std::mem::take(&mut self.jump_requested),
            shoot_at: self.shoot_at.take(),
            reload: std::mem::take(&mut self.reload_pressed),
            heal: std::mem::take(&mut self.heal_pressed),
        }
    }
}

/// Cursor position in world space, `None` when outside the window.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct Aim {
    pub world_cursor: Option<Vec2>,
}

pub fn update_aim_from_cursor(
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut aim: ResMut<Aim>,
) {
    aim.world_cursor = None;

    let Ok(window) = windows.single() else { return; };
    let Some(cursor) = window.cursor_position() else { return; };
    let Ok((camera, camera_tf)) = q_camera.single() else { return; };

    match camera.viewport_to_world_2d(camera_tf, cursor) {
        Ok(p) => aim.world_cursor = Some(p),
        Err(e) => debug!("viewport_to_world_2d failed: {e:?}"),
    }
}

/// Sample keys and mouse into [`PlayerIntent`].
///
/// Input resources are optional so headless apps (no input plugin) run this as a no-op.
pub fn gather_player_intent(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    aim: Res<Aim>,
    mut intent: ResMut<PlayerIntent>,
) {
    let Some(keys) = keys else { return; };

    let left = keys.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]);
    let right = keys.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]);
    intent.move_axis = match (left, right) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    };
    intent.run_held = keys.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);

    if keys.any_pressed([KeyCode::KeyW, KeyCode::Space, KeyCode::ArrowUp]) {
        intent.jump_requested = true;
    }
    if keys.just_pressed(KeyCode::KeyR) {
        intent.reload_pressed = true;
    }
    if keys.just_pressed(KeyCode::KeyH) {
        intent.heal_pressed = true;
    }

    let fire = buttons.is_some_and(|b| b.just_pressed(MouseButton::Left));
    if fire {
        match aim.world_cursor {
            Some(p) => intent.shoot_at = Some(p),
            None => debug!("shoot ignored: cursor outside window"),
        }
    }
}
