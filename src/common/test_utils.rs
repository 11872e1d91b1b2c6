//! Test helpers.
//!
//! Bevy provides `World::run_system_once` (via the `RunSystemOnce` trait) for quickly
//! executing a system in tests without building a full schedule.
//!
//! Systems that use `Commands` enqueue structural changes; we call `world.flush()`
//! after running so queued commands are applied before assertions.

use std::time::Duration;

use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::ecs::message::Messages;
use bevy::prelude::*;

/// One tick of the default 64 Hz fixed clock.
pub const TICK: Duration = Duration::from_micros(15_625);

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Insert (or replace) `Time<Fixed>` whose last delta is `dt`.
pub fn set_fixed_delta(world: &mut World, dt: Duration) {
    let mut t = Time::<Fixed>::default();
    t.advance_by(dt);
    world.insert_resource(t);
}

/// Make sure the message queue backing `MessageReader`/`MessageWriter<M>` exists.
pub fn init_messages<M: Message>(world: &mut World) {
    if world.get_resource::<Messages<M>>().is_none() {
        world.init_resource::<Messages<M>>();
    }
}

/// Take every pending message of type `M`.
pub fn drain_messages<M: Message>(world: &mut World) -> Vec<M> {
    world.resource_mut::<Messages<M>>().drain().collect()
}
