//! Debug visualization
//!
//! Overlays drawn on top of a frame to inspect what the stage is doing.

pub mod bounds;

pub use bounds::{draw_actor_bounds, BOUNDS_LINE_THICKNESS};
