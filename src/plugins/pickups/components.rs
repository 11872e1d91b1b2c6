use std::time::Duration;

use bevy::prelude::*;

use crate::common::tunables::{secs, PickupTunables};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickupKind {
    Ammo,
    Health,
}

impl PickupKind {
    pub fn other(self) -> Self {
        match self {
            PickupKind::Ammo => PickupKind::Health,
            PickupKind::Health => PickupKind::Ammo,
        }
    }
}

/// A collectible lying in the level until collected or its time-to-live runs out.
#[derive(Component, Debug, Clone)]
pub struct Pickup {
    pub kind: PickupKind,
    pub amount: u32,
    ttl: Timer,
}

impl Pickup {
    pub fn new(kind: PickupKind, t: &PickupTunables) -> Self {
        let amount = match kind {
            PickupKind::Ammo => t.ammo_amount,
            PickupKind::Health => t.health_amount,
        };
        Self {
            kind,
            amount,
            ttl: Timer::new(secs(t.ttl_secs), TimerMode::Once),
        }
    }

    pub fn remaining(&self) -> Duration {
        self.ttl.remaining()
    }

    /// Count down; `true` once the time-to-live reached zero.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.ttl.tick(dt).is_finished()
    }
}
