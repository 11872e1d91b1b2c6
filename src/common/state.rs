//! Global state machine and the fixed-tick ordering of the simulation.
//!
//! ```text
//! FixedUpdate:      Timers -> Decide -> Spawn
//! (avian physics step, CollisionStart messages)
//! FixedPostUpdate:  Resolve -> Commit
//! ```

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

/// Session state. The player dying is an in-session terminal state of the
/// player entity, not a transition of this machine.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
}

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    /// Sensors and countdowns: grounded probe, action/invulnerability timers,
    /// lifespans (and committing expired projectiles), time-to-live.
    Timers,
    /// Player intent resolution, then enemy behaviour.
    Decide,
    /// Single writers: projectile allocation, enemy/pickup spawning.
    Spawn,
    /// Combat resolver, reacting to this step's collision messages.
    Resolve,
    /// Deferred commits: pool returns and death follow-ups.
    Commit,
}

pub fn configure(app: &mut App) {
    app.configure_sets(
        FixedUpdate,
        (SimSet::Timers, SimSet::Decide, SimSet::Spawn)
            .chain()
            .run_if(in_state(GameState::InGame)),
    )
    .configure_sets(
        FixedPostUpdate,
        (SimSet::Resolve, SimSet::Commit)
            .chain()
            .after(CollisionEventSystems)
            .run_if(in_state(GameState::InGame)),
    );
}
