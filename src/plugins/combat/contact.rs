//! Mapping avian collision pairs back to gameplay entities.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;

#[derive(Clone, Copy, Debug)]
pub struct CollisionTarget {
    pub collider: Entity,
    pub body: Option<Entity>,
}

impl CollisionTarget {
    /// Gameplay components live on the body; bodiless colliders stand for themselves.
    #[inline]
    pub fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
pub fn targets(ev: &CollisionStart) -> (CollisionTarget, CollisionTarget) {
    (
        CollisionTarget {
            collider: ev.collider1,
            body: ev.body1,
        },
        CollisionTarget {
            collider: ev.collider2,
            body: ev.body2,
        },
    )
}

/// Order a pair so the side matching `is_a` comes first.
/// `None` unless exactly one side matches.
#[inline]
pub fn split<F>(ev: &CollisionStart, mut is_a: F) -> Option<(CollisionTarget, CollisionTarget)>
where
    F: FnMut(CollisionTarget) -> bool,
{
    let (t1, t2) = targets(ev);
    match (is_a(t1), is_a(t2)) {
        (true, false) => Some((t1, t2)),
        (false, true) => Some((t2, t1)),
        _ => None,
    }
}

#[inline]
pub fn is_in_layer(layers: &CollisionLayers, layer: Layer) -> bool {
    layers.memberships.has_all(layer)
}
