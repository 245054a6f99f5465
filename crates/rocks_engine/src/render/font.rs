//! Fixed-width text metrics

use serde::{Deserialize, Serialize};

use crate::foundation::math::{Rect, Vec2};

/// Horizontal placement of a text block relative to its position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalAlignment {
    /// Text starts at the position
    #[default]
    Left,
    /// Text is centered on the position
    Center,
}

/// Glyph metrics of a fixed-width face
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontMetrics {
    /// Horizontal advance of every glyph
    pub advance: f32,
    /// Distance between baselines
    pub line_height: f32,
    /// Part of the line height below the baseline
    pub descent: f32,
}

impl Default for FontMetrics {
    /// The classic 7x13 bitmap face
    fn default() -> Self {
        Self {
            advance: 7.0,
            line_height: 13.0,
            descent: 2.0,
        }
    }
}

impl FontMetrics {
    /// Local bounds of `text` laid out from the origin
    ///
    /// The first baseline sits at y = 0 and further lines go down. An empty
    /// string still occupies one (zero-width) line.
    #[allow(clippy::cast_precision_loss)]
    pub fn text_bounds(&self, text: &str) -> Rect {
        let lines = text.lines().count().max(1);
        let widest = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
        let width = widest as f32 * self.advance;
        let ascent = self.line_height - self.descent;
        let below = (lines - 1) as f32 * self.line_height + self.descent;
        Rect::new(0.0, -below, width, ascent)
    }

    /// Local bounds of `text` after applying the alignment shift
    pub fn aligned_bounds(&self, text: &str, alignment: HorizontalAlignment) -> Rect {
        let bounds = self.text_bounds(text);
        match alignment {
            HorizontalAlignment::Left => bounds,
            HorizontalAlignment::Center => bounds.moved(Vec2::new(-bounds.width() / 2.0, 0.0)),
        }
    }
}
