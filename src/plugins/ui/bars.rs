//! Screen-space resource bars (render-only).
//!
//! Plain sprites kept in a fixed offset from the main camera; the fill width
//! is the matching [`HudSnapshot`] fraction.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::camera::MainCamera;

use super::hud::HudSnapshot;

const BAR: Vec2 = Vec2::new(180.0, 10.0);
/// Top-left anchor relative to the camera centre.
const ORIGIN: Vec2 = Vec2::new(-540.0, 300.0);
const SPACING: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarKind {
    Health,
    Stamina,
    Ammo,
}

impl BarKind {
    const ALL: [BarKind; 3] = [BarKind::Health, BarKind::Stamina, BarKind::Ammo];

    fn color(self) -> Color {
        match self {
            BarKind::Health => Color::srgb(0.85, 0.2, 0.25),
            BarKind::Stamina => Color::srgb(0.25, 0.75, 0.35),
            BarKind::Ammo => Color::srgb(0.95, 0.8, 0.2),
        }
    }

    fn fraction(self, hud: &HudSnapshot) -> f32 {
        match self {
            BarKind::Health => hud.health_fraction(),
            BarKind::Stamina => hud.stamina_fraction(),
            BarKind::Ammo => hud.ammo_fraction(),
        }
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct HudBar {
    kind: BarKind,
    row: usize,
}

pub fn spawn_hud_bars(mut commands: Commands) {
    for (row, kind) in BarKind::ALL.into_iter().enumerate() {
        commands.spawn((
            Name::new(format!("HudBar({kind:?})")),
            HudBar { kind, row },
            Sprite {
                color: kind.color(),
                custom_size: Some(BAR),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 900.0),
            DespawnOnExit(GameState::InGame),
        ));
    }
}

pub fn update_hud_bars(
    hud: Res<HudSnapshot>,
    q_cam: Query<&Transform, (With<MainCamera>, Without<HudBar>)>,
    mut q_bars: Query<(&HudBar, &mut Transform), Without<MainCamera>>,
) {
    let Ok(cam) = q_cam.single() else {
        return;
    };

    for (bar, mut tf) in &mut q_bars {
        let fill = bar.kind.fraction(&hud);
        let left = cam.translation.x + ORIGIN.x;
        let y = cam.translation.y + ORIGIN.y - bar.row as f32 * SPACING;

        // Scale around the left edge so the bar drains toward it.
        tf.scale.x = fill;
        tf.translation.x = left + BAR.x * fill * 0.5;
        tf.translation.y = y;
    }
}
