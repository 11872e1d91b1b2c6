//! Feature plugins.

use bevy::prelude::*;

pub mod combat;
pub mod core;
pub mod enemies;
pub mod physics;
pub mod pickups;
pub mod player;
pub mod projectiles;
pub mod ui;
pub mod world;

// Render-only
pub mod camera;
pub mod lighting;

/// Register gameplay plugins that work in headless tests.
///
/// `core` goes first: later plugins read `Tunables` while registering.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    world::plugin(app);
    player::plugin(app);
    enemies::plugin(app);
    projectiles::plugin(app);
    combat::plugin(app);
    pickups::plugin(app);
    ui::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    lighting::plugin(app);
    camera::plugin(app);
    ui::render_plugin(app);
}
