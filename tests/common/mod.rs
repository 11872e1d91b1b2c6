//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `run_and_gun::game::configure_headless` to install gameplay plugins.
//!
//! Time is stepped manually: after the first (zero-delta) update, every
//! `app.update()` advances exactly one 64 Hz fixed tick.

#![allow(dead_code)]

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use run_and_gun::common::tunables::{SpawnTunables, Tunables};

pub const TICK: Duration = Duration::from_micros(15_625);

pub fn app_headless() -> App {
    app_headless_with(Tunables::default())
}

/// Headless app whose gameplay reads `tunables` instead of the defaults.
pub fn app_headless_with(tunables: Tunables) -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(TICK));
    app.insert_resource(tunables);

    run_and_gun::game::configure_headless(&mut app);
    app
}

/// Defaults with no enemies and no timed spawns.
pub fn quiet_tunables() -> Tunables {
    Tunables {
        spawning: SpawnTunables::disabled(),
        ..Tunables::default()
    }
}

pub fn step(app: &mut App, updates: usize) {
    for _ in 0..updates {
        app.update();
    }
}
