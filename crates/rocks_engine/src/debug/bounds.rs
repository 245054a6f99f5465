//! Collision bounds overlay
//!
//! Outlines the exact polygon each actor is tested with, so a mismatch
//! between a sprite and its collision shape is visible on screen.

use crate::actor::ActorRef;
use crate::physics::collision::world_polygon;
use crate::render::Canvas;

/// Line thickness of the bounds outline
pub const BOUNDS_LINE_THICKNESS: f32 = 1.0;

/// Draw the world-space collision polygon of every actor in `actors`
///
/// Callers pass the current membership, not a pass snapshot, so actors
/// removed during the draw pass are not outlined.
pub fn draw_actor_bounds(actors: &[ActorRef], canvas: &mut dyn Canvas) {
    for actor in actors {
        let polygon = world_polygon(&*actor.borrow());
        canvas.draw_polygon(&polygon, BOUNDS_LINE_THICKNESS);
    }
}
