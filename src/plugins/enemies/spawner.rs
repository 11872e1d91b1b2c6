//! Enemy spawning: on-demand requests plus an optional timed spawner.

use std::time::Duration;

use bevy::prelude::*;

use crate::common::tunables::{secs, SpawnTunables, Tunables};

use super::brain::EnemyBrain;
use super::systems::Enemy;

/// Ask for an enemy at `pos`. Consumed once per tick by `spawn_requested_enemies`.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct SpawnEnemyRequest {
    pub pos: Vec2,
}

/// Round-robin spawner over fixed points, capped by living enemies.
#[derive(Resource, Debug, Clone)]
pub struct EnemySpawner {
    timer: Option<Timer>,
    points: Vec<Vec2>,
    next: usize,
    max_alive: usize,
}

impl EnemySpawner {
    pub fn from_tunables(t: &SpawnTunables) -> Self {
        Self {
            timer: t
                .enemy_interval_secs
                .map(|s| Timer::new(secs(s), TimerMode::Repeating)),
            points: t.enemy_points.clone(),
            next: 0,
            max_alive: t.max_enemies,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.timer.is_some() && !self.points.is_empty()
    }

    /// Next spawn point if the interval elapsed this tick and there is room.
    pub fn poll(&mut self, dt: Duration, alive: usize) -> Option<Vec2> {
        let timer = self.timer.as_mut()?;
        if !timer.tick(dt).just_finished() || alive >= self.max_alive || self.points.is_empty() {
            return None;
        }

        let p = self.points[self.next % self.points.len()];
        self.next = self.next.wrapping_add(1);
        Some(p)
    }
}

pub fn request_initial_enemies(tunables: Res<Tunables>, mut requests: MessageWriter<SpawnEnemyRequest>) {
    for &pos in &tunables.spawning.initial_enemies {
        requests.write(SpawnEnemyRequest { pos });
    }
}

pub fn run_enemy_spawner(
    time: Res<Time<Fixed>>,
    mut spawner: ResMut<EnemySpawner>,
    q: Query<&EnemyBrain, With<Enemy>>,
    mut requests: MessageWriter<SpawnEnemyRequest>,
) {
    let alive = q.iter().filter(|b| b.is_alive()).count();
    if let Some(pos) = spawner.poll(time.delta(), alive) {
        debug!("enemy spawner: {alive} alive, spawning at {pos}");
        requests.write(SpawnEnemyRequest { pos });
    }
}
