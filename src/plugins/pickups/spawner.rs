//! Pickup spawning: on-demand requests (loot drops) plus a timed spawner.

use std::time::Duration;

use bevy::prelude::*;

use crate::common::tunables::{secs, SpawnTunables};

use super::components::PickupKind;

#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct SpawnPickupRequest {
    pub kind: PickupKind,
    pub pos: Vec2,
}

/// Cycles through spawn points, alternating ammo and health.
#[derive(Resource, Debug, Clone)]
pub struct PickupSpawner {
    timer: Option<Timer>,
    points: Vec<Vec2>,
    next: usize,
    next_kind: PickupKind,
}

impl PickupSpawner {
    pub fn from_tunables(t: &SpawnTunables) -> Self {
        Self {
            timer: t
                .pickup_interval_secs
                .map(|s| Timer::new(secs(s), TimerMode::Repeating)),
            points: t.pickup_points.clone(),
            next: 0,
            next_kind: PickupKind::Ammo,
        }
    }

    pub fn poll(&mut self, dt: Duration) -> Option<SpawnPickupRequest> {
        let timer = self.timer.as_mut()?;
        if !timer.tick(dt).just_finished() || self.points.is_empty() {
            return None;
        }

        let req = SpawnPickupRequest {
            kind: self.next_kind,
            pos: self.points[self.next % self.points.len()],
        };
        self.next = self.next.wrapping_add(1);
        self.next_kind = self.next_kind.other();
        Some(req)
    }
}

pub fn run_pickup_spawner(
    time: Res<Time<Fixed>>,
    mut spawner: ResMut<PickupSpawner>,
    mut requests: MessageWriter<SpawnPickupRequest>,
) {
    if let Some(req) = spawner.poll(time.delta()) {
        requests.write(req);
    }
}
