//! Small motion helpers shared by the player, enemies and projectiles.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    /// Facing for a horizontal delta; zero keeps `self`.
    #[inline]
    pub fn toward(self, dx: f32) -> Facing {
        if dx < 0.0 {
            Facing::Left
        } else if dx > 0.0 {
            Facing::Right
        } else {
            self
        }
    }
}

/// Angle (radians, +x = 0, counter-clockwise) from `from` to `to`.
#[inline]
pub fn aim_angle(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Velocity vector for a heading and speed.
#[inline]
pub fn velocity_from_angle(angle: f32, speed: f32) -> Vec2 {
    Vec2::from_angle(angle) * speed
}
