//! UI plugins.
//!
//! - gameplay: publish [`HudSnapshot`] every frame (works headless)
//! - render: camera-anchored resource bars drawn from the snapshot

use bevy::prelude::*;

use crate::common::state::GameState;

pub mod bars;
pub mod hud;

pub use hud::HudSnapshot;

pub fn plugin(app: &mut App) {
    app.init_resource::<HudSnapshot>().add_systems(
        PostUpdate,
        hud::publish_hud.run_if(in_state(GameState::InGame)),
    );
}

pub fn render_plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), bars::spawn_hud_bars)
        .add_systems(
            PostUpdate,
            bars::update_hud_bars
                .after(hud::publish_hud)
                .after(crate::plugins::camera::follow_player)
                .before(TransformSystems::Propagate)
                .run_if(in_state(GameState::InGame)),
        );
}

#[cfg(test)]
mod tests;
