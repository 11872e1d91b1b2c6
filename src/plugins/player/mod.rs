//! Player plugin.
//!
//! Pipeline:
//! - Update: sample input, write the `PlayerIntent` resource (edges latched)
//! - FixedUpdate/Timers: grounded probe, action + invulnerability countdowns
//! - FixedUpdate/Decide: resolve intents through `PlayerState`, write velocity
//!   and `FireProjectile` requests
//! - FixedPostUpdate/Commit: death follow-up (`PlayerDowned`)
//! - PostUpdate: animation label + sprite presentation
//!
//! The rules themselves live in [`state::PlayerState`]; systems here only move
//! data between it and the physics/input collaborators.

use bevy::prelude::*;

use crate::common::state::{GameState, SimSet};

pub mod input;
pub mod state;
pub mod systems;

pub use input::{Aim, PlayerIntent};
pub use state::{DamageOutcome, PlayerAnimation, PlayerPhase, PlayerState, ShotOutcome, Vitals};
pub use systems::{Grounded, Player};

pub fn plugin(app: &mut App) {
    app.init_resource::<PlayerIntent>()
        .init_resource::<Aim>()
        .add_systems(OnEnter(GameState::InGame), systems::spawn_player)
        .add_systems(
            Update,
            (input::update_aim_from_cursor, input::gather_player_intent)
                .chain()
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            FixedUpdate,
            (systems::update_grounded, systems::tick_player_timers).in_set(SimSet::Timers),
        )
        .add_systems(FixedUpdate, systems::drive_player.in_set(SimSet::Decide))
        .add_systems(FixedPostUpdate, systems::on_player_downed.in_set(SimSet::Commit))
        .add_systems(
            PostUpdate,
            systems::present_player.run_if(in_state(GameState::InGame)),
        );
}
