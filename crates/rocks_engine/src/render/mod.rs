//! # Rendering Seam
//!
//! Actors never talk to a graphics API directly. Draw passes write to a
//! [`Canvas`], which a window backend implements to put pixels on screen and
//! which [`DrawList`] implements by recording commands (headless runs and
//! tests).
//!
//! The sprite atlas layout ([`SpriteSheet`]) and the text face metrics
//! ([`FontMetrics`]) live here too, since actor bounds are derived from them.

pub mod draw_list;
pub mod font;
pub mod sprite_sheet;

pub use draw_list::{DrawCommand, DrawList};
pub use font::{FontMetrics, HorizontalAlignment};
pub use sprite_sheet::{FrameId, SpriteSheet};

use crate::foundation::math::{Point2, Transform2D};

/// Drawing surface for one frame
pub trait Canvas {
    /// Draw a sprite atlas frame, centered on the local origin, at `transform`
    fn draw_sprite(&mut self, frame: FrameId, transform: &Transform2D);

    /// Draw a text block whose local origin is its top-left baseline
    fn draw_text(&mut self, text: &str, transform: &Transform2D);

    /// Draw the outline of a closed polygon given in world space
    fn draw_polygon(&mut self, points: &[Point2], thickness: f32);
}
