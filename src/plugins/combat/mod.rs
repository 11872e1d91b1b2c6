//! Combat plugin: turns physics contacts into damage, releases and pickups.
//!
//! Runs in `FixedPostUpdate` after avian has written this step's
//! `CollisionStart` messages and contact sets:
//!
//! - projectile × enemy (player shot): release, knockback + stagger, damage
//! - projectile × player (enemy shot): release, player damage
//! - projectile × world: release
//! - enemy × player: player damage for as long as they touch
//! - player × pickup: collect, pickup spent unconditionally
//!
//! Deaths leave as `EnemyKilled` / `PlayerDowned` messages for the owning
//! plugins to follow up in `SimSet::Commit`.

use bevy::prelude::*;

use crate::common::state::SimSet;

pub mod contact;
pub mod messages;
pub mod resolver;

pub use messages::{EnemyKilled, PlayerDowned};

pub fn plugin(app: &mut App) {
    app.add_message::<EnemyKilled>()
        .add_message::<PlayerDowned>()
        .add_systems(
            FixedPostUpdate,
            (
                resolver::resolve_projectile_hits,
                resolver::resolve_enemy_contacts,
                resolver::resolve_pickup_overlaps,
            )
                .chain()
                .in_set(SimSet::Resolve),
        );
}
