//! Recording canvas
//!
//! Collects draw calls in submission order instead of rasterizing them.

use super::{Canvas, FrameId};
use crate::foundation::math::{Point2, Transform2D};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Sprite frame at a transform
    Sprite {
        /// Atlas frame
        frame: FrameId,
        /// World transform
        transform: Transform2D,
    },

    /// Text block at a transform
    Text {
        /// Rendered string
        text: String,
        /// World transform
        transform: Transform2D,
    },

    /// Closed polygon outline
    Polygon {
        /// World-space vertices
        points: Vec<Point2>,
        /// Line thickness
        thickness: f32,
    },
}

/// [`Canvas`] that records every command for later inspection or replay
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Create an empty draw list
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in submission order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all recorded commands, keeping the allocation
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of recorded sprite commands
    pub fn sprite_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Sprite { .. })).count()
    }

    /// Number of recorded polygon outlines
    pub fn polygon_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Polygon { .. })).count()
    }

    /// Strings of all recorded text commands
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for DrawList {
    fn draw_sprite(&mut self, frame: FrameId, transform: &Transform2D) {
        self.commands.push(DrawCommand::Sprite {
            frame,
            transform: *transform,
        });
    }

    fn draw_text(&mut self, text: &str, transform: &Transform2D) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            transform: *transform,
        });
    }

    fn draw_polygon(&mut self, points: &[Point2], thickness: f32) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            thickness,
        });
    }
}
