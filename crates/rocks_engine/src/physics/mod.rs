//! Physics module for collision detection
//!
//! Exact convex-polygon overlap tests for actors. There is no collision
//! response here; callers decide what a hit means.

pub mod collision;

pub use collision::{
    intersects,
    polygon_from_bounds,
    polygons_intersect,
    project_polygon,
    world_polygon,
    ContactMode,
    Polygon,
};
