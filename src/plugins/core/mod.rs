//! Core plugin: shared resources and global settings.

use bevy::prelude::*;

use crate::common::lifecycle::despawn_pending;
use crate::common::rng::LootRng;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>();
    let seed = app.world().resource::<Tunables>().loot_seed;

    app.insert_resource(LootRng::new(seed))
        .insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)))
        .add_systems(PostUpdate, despawn_pending.run_if(in_state(GameState::InGame)));
}
