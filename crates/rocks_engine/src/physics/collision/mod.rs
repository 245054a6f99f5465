//! Collision detection between actors
//!
//! Shapes are stored in local space (an actor's [`Actor::bounds`]) and moved
//! into world space on demand through the actor's own transform before the
//! narrow-phase test.
//!
//! # Module Organization
//!
//! - [`polygon`] - Polygons built from bounds and projected through transforms
//! - [`sat`] - Separating Axis Theorem overlap test

pub mod polygon;
pub mod sat;

pub use polygon::{polygon_from_bounds, project_polygon, Polygon};
pub use sat::{polygons_intersect, ContactMode};

use crate::actor::Actor;

/// World-space collision polygon of an actor
pub fn world_polygon(actor: &dyn Actor) -> Polygon {
    project_polygon(&polygon_from_bounds(&actor.bounds()), &actor.transform())
}

/// Whether two actors overlap
///
/// An actor never collides with itself, whatever its shape or transform.
pub fn intersects(a: &dyn Actor, b: &dyn Actor, mode: ContactMode) -> bool {
    if a.id() == b.id() {
        return false;
    }
    polygons_intersect(&world_polygon(a), &world_polygon(b), mode)
}
