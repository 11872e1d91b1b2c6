use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::motion::velocity_from_angle;
use crate::common::tunables::secs;

use super::components::{Faction, PooledProjectile, Projectile, ProjectileState};
use super::messages::FireProjectile;

/// Fixed-capacity projectile pool.
///
/// `slots` is every pooled entity ever created (never grows past `capacity`);
/// `free` is the subset that is currently inactive.
#[derive(Resource, Debug)]
pub struct ProjectilePool {
    slots: Vec<Entity>,
    free: Vec<Entity>,
    capacity: usize,
}

impl ProjectilePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    pub fn active_len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn slots(&self) -> &[Entity] {
        &self.slots
    }

    /// Register a freshly spawned, inactive slot.
    fn register(&mut self, e: Entity) {
        debug_assert!(self.slots.len() < self.capacity);
        self.slots.push(e);
        self.free.push(e);
    }

    #[inline]
    pub fn pop_free(&mut self) -> Option<Entity> {
        self.free.pop()
    }

    #[inline]
    pub fn push_free(&mut self, e: Entity) {
        debug_assert!(self.free.len() < self.slots.len());
        self.free.push(e);
    }
}

#[inline]
pub fn active_layers(faction: Faction) -> CollisionLayers {
    match faction {
        Faction::Player => CollisionLayers::new(Layer::PlayerProjectile, [Layer::World, Layer::Enemy]),
        Faction::Enemy => CollisionLayers::new(Layer::EnemyProjectile, [Layer::World, Layer::Player]),
    }
}

/// "Disabled" without structural changes: empty filters means we collide with nothing.
#[inline]
pub fn inactive_layers(faction: Faction) -> CollisionLayers {
    match faction {
        Faction::Player => CollisionLayers::new(Layer::PlayerProjectile, [] as [Layer; 0]),
        Faction::Enemy => CollisionLayers::new(Layer::EnemyProjectile, [] as [Layer; 0]),
    }
}

/// Pre-spawn pooled projectiles (inactive).
///
/// Physics components stay on the entity for its whole life; inactive slots
/// are hidden, motionless and filter out every layer, so they never produce
/// collision events.
pub fn init_projectile_pool(mut commands: Commands, mut pool: ResMut<ProjectilePool>) {
    let missing = pool.capacity.saturating_sub(pool.slots.len());

    for _ in 0..missing {
        let e = commands
            .spawn((
                Name::new("Projectile(Pooled)"),
                PooledProjectile,
                ProjectileState::Inactive,
                Projectile::default(),
                Sprite {
                    color: Color::srgb(1.0, 0.85, 0.3),
                    custom_size: Some(Vec2::new(10.0, 4.0)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, 2.0),
                Visibility::Hidden,
                (
                    RigidBody::Dynamic,
                    Collider::circle(3.0),
                    // Overlap-only: projectiles report hits but never push bodies around.
                    Sensor,
                    GravityScale(0.0),
                    inactive_layers(Faction::Player),
                    LinearVelocity(Vec2::ZERO),
                    CollisionEventsEnabled,
                ),
            ))
            .id();

        pool.register(e);
    }
}

/// Mutable view of one pool slot.
pub type SlotQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static mut ProjectileState,
        &'static mut Projectile,
        &'static mut Transform,
        &'static mut LinearVelocity,
        &'static mut GravityScale,
        &'static mut Visibility,
        &'static mut CollisionLayers,
    ),
    With<PooledProjectile>,
>;

/// Activate one slot for `req`, or `None` when every slot is in flight.
pub fn acquire(
    pool: &mut ProjectilePool,
    slots: &mut SlotQuery,
    req: &FireProjectile,
    lifespan_secs: f32,
) -> Option<Entity> {
    let e = pool.pop_free()?;

    let Ok((mut state, mut projectile, mut tf, mut vel, mut gravity, mut vis, mut layers)) = slots.get_mut(e) else {
        warn!("projectile pool held {e:?} without slot components; dropping it");
        return None;
    };

    *state = ProjectileState::Active;
    projectile.reset_for_fire(req.faction, req.damage, req.speed, req.gravity, secs(lifespan_secs));
    tf.translation = req.origin.extend(2.0);
    tf.rotation = Quat::from_rotation_z(req.angle);
    vel.0 = velocity_from_angle(req.angle, req.speed);
    gravity.0 = if req.gravity { 1.0 } else { 0.0 };
    *vis = Visibility::Visible;
    *layers = active_layers(req.faction);

    Some(e)
}
