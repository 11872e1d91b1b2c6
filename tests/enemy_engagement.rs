//! Enemy behaviour against a live player, through physics.

mod common;

use bevy::prelude::*;
use run_and_gun::plugins::enemies::{Behavior, Enemy, EnemyBrain, SpawnEnemyRequest};
use run_and_gun::plugins::player::{Player, PlayerState};

fn player_pos(app: &mut App) -> Vec2 {
    let world = app.world_mut();
    world
        .query_filtered::<&Transform, With<Player>>()
        .single(world)
        .unwrap()
        .translation
        .truncate()
}

fn brain(app: &mut App) -> EnemyBrain {
    let world = app.world_mut();
    world
        .query_filtered::<&EnemyBrain, With<Enemy>>()
        .single(world)
        .unwrap()
        .clone()
}

fn player_health(app: &mut App) -> u32 {
    let world = app.world_mut();
    world
        .query_filtered::<&PlayerState, With<Player>>()
        .single(world)
        .unwrap()
        .vitals()
        .health
}

#[test]
fn far_enemy_patrols() {
    let mut app = common::app_headless_with(common::quiet_tunables());
    common::step(&mut app, 2);

    let pos = player_pos(&mut app) + Vec2::new(600.0, 0.0);
    app.world_mut().write_message(SpawnEnemyRequest { pos });
    common::step(&mut app, 3);

    let b = brain(&mut app);
    assert_eq!(b.behavior(), Behavior::Patrol);
    assert!(b.is_alive());
}

#[test]
fn close_enemy_attacks_and_hits_the_player() {
    let mut app = common::app_headless_with(common::quiet_tunables());
    common::step(&mut app, 2);

    let pos = player_pos(&mut app) + Vec2::new(100.0, 0.0);
    app.world_mut().write_message(SpawnEnemyRequest { pos });
    common::step(&mut app, 3);

    let b = brain(&mut app);
    assert_eq!(b.behavior(), Behavior::Attack);
    assert!(!b.fire_cooldown().is_zero(), "enemy should have fired on its first attack tick");

    // 400 px/s over ~100 px: well under a second.
    let mut hit = false;
    for _ in 0..64 {
        common::step(&mut app, 1);
        if player_health(&mut app) < 3 {
            hit = true;
            break;
        }
    }
    assert!(hit, "enemy shot should reach the player");
}

#[test]
fn pinned_player_keeps_taking_contact_damage() {
    // Player against the right wall; an enemy that never chases or shoots
    // patrols into them and keeps pushing.
    let mut tunables = common::quiet_tunables();
    tunables.player.spawn_point = Vec2::new(610.0, -150.0);
    tunables.enemy.vision_range = 0.0;
    tunables.enemy.attack_range = 0.0;
    let mut app = common::app_headless_with(tunables);
    common::step(&mut app, 2);

    app.world_mut().write_message(SpawnEnemyRequest { pos: Vec2::new(540.0, -150.0) });

    // First touch after ~0.6 s, then one hit per 1 s of invulnerability.
    let mut ticks = 0;
    while player_health(&mut app) > 1 && ticks < 240 {
        common::step(&mut app, 1);
        ticks += 1;
    }
    assert!(
        player_health(&mut app) <= 1,
        "sustained contact should hit again once invulnerability ends"
    );
    assert!(ticks > 64, "second hit must wait out invulnerability, got {ticks} ticks");
}
