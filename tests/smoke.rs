mod common;

use bevy::prelude::*;
use run_and_gun::common::animation::AnimationLabel;
use run_and_gun::common::tunables::Tunables;
use run_and_gun::plugins::enemies::Enemy;
use run_and_gun::plugins::player::{Player, PlayerState};
use run_and_gun::plugins::projectiles::{PooledProjectile, ProjectilePool};
use run_and_gun::plugins::ui::HudSnapshot;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();
    common::step(&mut app, 3);
}

#[test]
fn session_starts_with_player_enemies_and_pool() {
    let mut app = common::app_headless();
    common::step(&mut app, 4);

    let t = Tunables::default();
    let world = app.world_mut();

    let players = world.query::<(&Player, &PlayerState)>().iter(world).count();
    assert_eq!(players, 1);

    let enemies = world.query::<&Enemy>().iter(world).count();
    assert_eq!(enemies, t.spawning.initial_enemies.len());

    let slots = world.query::<&PooledProjectile>().iter(world).count();
    assert_eq!(slots, t.projectile.capacity);
    assert_eq!(world.resource::<ProjectilePool>().free_len(), t.projectile.capacity);
}

#[test]
fn hud_snapshot_and_labels_are_published() {
    let mut app = common::app_headless_with(common::quiet_tunables());
    common::step(&mut app, 3);

    let hud = *app.world().resource::<HudSnapshot>();
    assert_eq!(hud.health, 3);
    assert_eq!(hud.ammo, 30);
    assert_eq!(hud.max_stamina, 100.0);

    let world = app.world_mut();
    let label = world
        .query_filtered::<&AnimationLabel, With<Player>>()
        .single(world)
        .unwrap();
    assert_eq!(label.0, "idle");
}

#[test]
fn overridden_tunables_reach_the_simulation() {
    let mut t = common::quiet_tunables();
    t.player.max_ammo = 5;
    t.projectile.capacity = 3;

    let mut app = common::app_headless_with(t);
    common::step(&mut app, 3);

    assert_eq!(app.world().resource::<HudSnapshot>().max_ammo, 5);
    assert_eq!(app.world().resource::<ProjectilePool>().capacity(), 3);
}
