use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::test_utils::run_system_once;

#[test]
fn spawns_static_level_on_enter() {
    let mut world = World::new();
    run_system_once(&mut world, super::spawn_level);

    let mut q = world.query::<(&Name, &RigidBody, &CollisionLayers)>();
    let blocks: Vec<_> = q.iter(&world).collect();
    assert_eq!(blocks.len(), 3 + super::LEDGES.len());

    for (_, rb, layers) in blocks {
        assert!(matches!(*rb, RigidBody::Static));
        assert!(layers.memberships.has_all(Layer::World));
        assert!(layers.filters.has_all(Layer::PlayerProjectile));
        assert!(layers.filters.has_all(Layer::EnemyProjectile));
    }

    let walls = world
        .query::<&Name>()
        .iter(&world)
        .filter(|n| n.as_str().starts_with("Wall"))
        .count();
    assert_eq!(walls, 2);
}

#[test]
fn spawn_points_sit_inside_walls() {
    let t = crate::common::tunables::Tunables::default();
    let inside = |p: Vec2| p.x.abs() < super::HALF_W && p.y > super::GROUND_Y;

    assert!(inside(t.player.spawn_point));
    assert!(t.spawning.initial_enemies.iter().copied().all(inside));
    assert!(t.spawning.enemy_points.iter().copied().all(inside));
    assert!(t.spawning.pickup_points.iter().copied().all(inside));
}
