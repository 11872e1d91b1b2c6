//! Projectile pool tests.
//!
//! Pure ECS: no physics pipeline runs here. Slots are activated through the
//! allocator, aged with a hand-set `Time<Fixed>`, and released by mutating
//! `ProjectileState` the same way the combat resolver does.

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::test_utils::{init_messages, run_system_once, set_fixed_delta, TICK};
use crate::common::tunables::Tunables;

use super::components::{Faction, PooledProjectile, Projectile, ProjectileState};
use super::messages::FireProjectile;
use super::pool::{self, ProjectilePool};
use super::{allocator, commit, lifetime};

fn pool_world(capacity: usize) -> World {
    let mut world = World::new();
    let mut tunables = Tunables::default();
    tunables.projectile.capacity = capacity;
    world.insert_resource(tunables);
    world.insert_resource(ProjectilePool::new(capacity));
    init_messages::<FireProjectile>(&mut world);
    run_system_once(&mut world, pool::init_projectile_pool);
    world
}

fn player_shot(origin: Vec2) -> FireProjectile {
    FireProjectile {
        faction: Faction::Player,
        origin,
        angle: 0.0,
        speed: 900.0,
        gravity: false,
        damage: 1,
    }
}

fn fire(world: &mut World, req: FireProjectile) {
    world.write_message(req);
    run_system_once(world, allocator::allocate_projectiles);
    world.resource_mut::<Messages<FireProjectile>>().clear();
}

fn active(world: &mut World) -> Vec<Entity> {
    let mut q = world.query::<(Entity, &ProjectileState)>();
    q.iter(world)
        .filter(|(_, s)| **s == ProjectileState::Active)
        .map(|(e, _)| e)
        .collect()
}

fn release(world: &mut World, e: Entity) -> bool {
    world.get_mut::<ProjectileState>(e).unwrap().release()
}

#[test]
fn init_spawns_capacity_slots_all_inactive() {
    let mut world = pool_world(8);

    assert_eq!(world.resource::<ProjectilePool>().free_len(), 8);
    assert_eq!(world.resource::<ProjectilePool>().active_len(), 0);

    let mut q = world.query::<(&PooledProjectile, &ProjectileState, &Visibility, &CollisionLayers, &LinearVelocity)>();
    assert_eq!(q.iter(&world).count(), 8);

    for (_, state, vis, layers, vel) in q.iter(&world) {
        assert_eq!(*state, ProjectileState::Inactive);
        assert_eq!(*vis, Visibility::Hidden);
        assert_eq!(vel.0, Vec2::ZERO);
        assert!(!layers.filters.has_all(Layer::World));
        assert!(!layers.filters.has_all(Layer::Enemy));
        assert!(!layers.filters.has_all(Layer::Player));
    }
}

#[test]
fn init_is_idempotent() {
    let mut world = pool_world(4);
    run_system_once(&mut world, pool::init_projectile_pool);

    assert_eq!(world.query::<&PooledProjectile>().iter(&world).count(), 4);
    assert_eq!(world.resource::<ProjectilePool>().slots().len(), 4);
}

#[test]
fn fire_activates_slot_with_heading_and_layers() {
    let mut world = pool_world(2);
    fire(&mut world, player_shot(Vec2::new(10.0, 20.0)));

    let hot = active(&mut world);
    assert_eq!(hot.len(), 1);
    let e = hot[0];

    assert_eq!(world.get::<Transform>(e).unwrap().translation.truncate(), Vec2::new(10.0, 20.0));
    assert_eq!(world.get::<LinearVelocity>(e).unwrap().0, Vec2::new(900.0, 0.0));
    assert_eq!(*world.get::<Visibility>(e).unwrap(), Visibility::Visible);
    assert_eq!(world.get::<GravityScale>(e).unwrap().0, 0.0);

    let layers = world.get::<CollisionLayers>(e).unwrap();
    assert!(layers.memberships.has_all(Layer::PlayerProjectile));
    assert!(layers.filters.has_all(Layer::Enemy));
    assert!(layers.filters.has_all(Layer::World));
    assert!(!layers.filters.has_all(Layer::Player));

    let projectile = world.get::<Projectile>(e).unwrap();
    assert_eq!(projectile.faction, Faction::Player);
    assert_eq!(projectile.damage, 1);

    assert_eq!(world.resource::<ProjectilePool>().active_len(), 1);
}

#[test]
fn enemy_shot_targets_player_layer() {
    let mut world = pool_world(1);
    let mut req = player_shot(Vec2::ZERO);
    req.faction = Faction::Enemy;
    fire(&mut world, req);

    let e = active(&mut world)[0];
    let layers = world.get::<CollisionLayers>(e).unwrap();
    assert!(layers.memberships.has_all(Layer::EnemyProjectile));
    assert!(layers.filters.has_all(Layer::Player));
    assert!(!layers.filters.has_all(Layer::Enemy));
}

#[test]
fn exhausted_pool_drops_requests() {
    let mut world = pool_world(3);

    for i in 0..5 {
        fire(&mut world, player_shot(Vec2::new(i as f32, 0.0)));
    }

    assert_eq!(active(&mut world).len(), 3);
    assert_eq!(world.resource::<ProjectilePool>().free_len(), 0);
    assert_eq!(world.query::<&PooledProjectile>().iter(&world).count(), 3);
}

#[test]
fn several_requests_in_one_tick_each_take_a_slot() {
    let mut world = pool_world(4);
    for i in 0..3 {
        world.write_message(player_shot(Vec2::new(i as f32 * 10.0, 0.0)));
    }
    run_system_once(&mut world, allocator::allocate_projectiles);

    assert_eq!(active(&mut world).len(), 3);
    assert_eq!(world.resource::<ProjectilePool>().free_len(), 1);
}

#[test]
fn release_is_idempotent() {
    let mut world = pool_world(1);
    fire(&mut world, player_shot(Vec2::ZERO));
    let e = active(&mut world)[0];

    assert!(release(&mut world, e));
    assert!(!release(&mut world, e));

    run_system_once(&mut world, commit::release_commit);
    assert!(!release(&mut world, e));

    run_system_once(&mut world, commit::release_commit);
    assert_eq!(world.resource::<ProjectilePool>().free_len(), 1);
}

#[test]
fn commit_restores_inactive_invariants() {
    let mut world = pool_world(1);
    fire(&mut world, player_shot(Vec2::new(5.0, 5.0)));
    let e = active(&mut world)[0];

    release(&mut world, e);
    run_system_once(&mut world, commit::release_commit);

    assert_eq!(*world.get::<ProjectileState>(e).unwrap(), ProjectileState::Inactive);
    assert_eq!(*world.get::<Visibility>(e).unwrap(), Visibility::Hidden);
    assert_eq!(world.get::<LinearVelocity>(e).unwrap().0, Vec2::ZERO);
    let layers = world.get::<CollisionLayers>(e).unwrap();
    assert!(!layers.filters.has_all(Layer::Enemy));
    assert!(!layers.filters.has_all(Layer::World));
    assert_eq!(world.resource::<ProjectilePool>().free_len(), 1);
}

#[test]
fn released_slot_is_reused() {
    let mut world = pool_world(1);
    fire(&mut world, player_shot(Vec2::ZERO));
    let first = active(&mut world)[0];

    release(&mut world, first);
    run_system_once(&mut world, commit::release_commit);
    fire(&mut world, player_shot(Vec2::new(50.0, 0.0)));

    let hot = active(&mut world);
    assert_eq!(hot, vec![first]);
    assert_eq!(world.get::<Transform>(first).unwrap().translation.x, 50.0);
}

#[test]
fn lifespan_expires_after_exactly_two_seconds() {
    let mut world = pool_world(1);
    set_fixed_delta(&mut world, TICK);
    fire(&mut world, player_shot(Vec2::ZERO));
    let e = active(&mut world)[0];

    // 128 ticks of 15.625 ms = 2 s.
    for _ in 0..127 {
        run_system_once(&mut world, lifetime::age_projectiles);
    }
    assert_eq!(*world.get::<ProjectileState>(e).unwrap(), ProjectileState::Active);

    run_system_once(&mut world, lifetime::age_projectiles);
    assert_eq!(*world.get::<ProjectileState>(e).unwrap(), ProjectileState::PendingRelease);

    run_system_once(&mut world, commit::release_commit);
    assert_eq!(*world.get::<ProjectileState>(e).unwrap(), ProjectileState::Inactive);
}

#[test]
fn expired_slot_fires_again_in_the_same_tick() {
    let mut world = pool_world(1);
    set_fixed_delta(&mut world, TICK);
    fire(&mut world, player_shot(Vec2::ZERO));
    let e = active(&mut world)[0];

    for _ in 0..127 {
        run_system_once(&mut world, lifetime::age_projectiles);
        run_system_once(&mut world, commit::release_commit);
    }
    assert_eq!(world.resource::<ProjectilePool>().free_len(), 0);

    // Tick 128, in plugin order: age, commit, then this tick's fire request.
    run_system_once(&mut world, lifetime::age_projectiles);
    run_system_once(&mut world, commit::release_commit);
    assert_eq!(world.resource::<ProjectilePool>().free_len(), 1);
    assert_eq!(world.get::<LinearVelocity>(e).unwrap().0, Vec2::ZERO);

    fire(&mut world, player_shot(Vec2::new(-40.0, 0.0)));
    assert_eq!(active(&mut world), vec![e]);
    assert_eq!(world.get::<Transform>(e).unwrap().translation.x, -40.0);
}

#[test]
fn inactive_slots_do_not_age() {
    let mut world = pool_world(2);
    set_fixed_delta(&mut world, TICK);

    for _ in 0..200 {
        run_system_once(&mut world, lifetime::age_projectiles);
    }

    let mut q = world.query::<&ProjectileState>();
    assert!(q.iter(&world).all(|s| *s == ProjectileState::Inactive));
}

#[test]
fn refire_resets_lifespan() {
    let mut world = pool_world(1);
    set_fixed_delta(&mut world, TICK);
    fire(&mut world, player_shot(Vec2::ZERO));
    let e = active(&mut world)[0];

    for _ in 0..100 {
        run_system_once(&mut world, lifetime::age_projectiles);
    }
    release(&mut world, e);
    run_system_once(&mut world, commit::release_commit);
    fire(&mut world, player_shot(Vec2::ZERO));

    for _ in 0..100 {
        run_system_once(&mut world, lifetime::age_projectiles);
    }
    assert_eq!(*world.get::<ProjectileState>(e).unwrap(), ProjectileState::Active);
}

#[test]
fn pool_accounting_never_exceeds_capacity() {
    // Fire and release in a deterministic pseudo-random pattern.
    let mut world = pool_world(4);
    let mut x: u32 = 0x9E37_79B9;

    for _ in 0..200 {
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;

        if x % 3 == 0 {
            if let Some(&e) = active(&mut world).first() {
                release(&mut world, e);
                run_system_once(&mut world, commit::release_commit);
            }
        } else {
            fire(&mut world, player_shot(Vec2::ZERO));
        }

        let pool = world.resource::<ProjectilePool>();
        assert_eq!(pool.free_len() + pool.active_len(), 4);
        let live = pool.active_len();
        assert_eq!(active(&mut world).len(), live);
    }
}
