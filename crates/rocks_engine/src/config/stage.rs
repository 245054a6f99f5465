//! Stage configuration

use serde::{Deserialize, Serialize};

use super::Config;
use crate::foundation::math::{Point2, Rect};
use crate::physics::collision::ContactMode;
use crate::render::FontMetrics;

/// Settings a [`Stage`](crate::stage::Stage) is built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// World width; the world rectangle is centered on the origin
    pub width: f32,

    /// World height
    pub height: f32,

    /// Start with the debug bounds overlay enabled
    pub draw_actor_bounds: bool,

    /// Whether exactly touching shapes count as colliding
    pub contact: ContactMode,

    /// Layout of the sprite atlas
    pub sprite_sheet: SpriteSheetConfig,

    /// Metrics of the fixed-width text face
    pub font: FontMetrics,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
            draw_actor_bounds: false,
            contact: ContactMode::default(),
            sprite_sheet: SpriteSheetConfig::default(),
            font: FontMetrics::default(),
        }
    }
}

impl Config for StageConfig {}

impl StageConfig {
    /// Create a configuration for a world of the given size
    pub fn with_size(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// World rectangle centered on the origin
    pub fn bounds(&self) -> Rect {
        Rect::centered(Point2::origin(), self.width, self.height)
    }
}

/// Sprite atlas cut on a regular grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteSheetConfig {
    /// Atlas width in pixels
    pub width: f32,
    /// Atlas height in pixels
    pub height: f32,
    /// Edge length of one square cell
    pub cell_size: f32,
}

impl Default for SpriteSheetConfig {
    fn default() -> Self {
        Self {
            width: 128.0,
            height: 96.0,
            cell_size: 32.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Format;

    #[test]
    fn test_bounds_centered_on_origin() {
        let config = StageConfig::with_size(1024.0, 768.0);

        assert_eq!(config.bounds(), Rect::new(-512.0, -384.0, 512.0, 384.0));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let text = "width = 200.0\ncontact = \"Exclusive\"\n";
        let config = StageConfig::from_str_with_format(text, Format::Toml).unwrap();

        assert_eq!(config.width, 200.0);
        assert_eq!(config.height, 768.0);
        assert_eq!(config.contact, ContactMode::Exclusive);
        assert_eq!(config.sprite_sheet, SpriteSheetConfig::default());
    }

    #[test]
    fn test_ron_round_trip() {
        let config = StageConfig {
            draw_actor_bounds: true,
            ..StageConfig::with_size(300.0, 200.0)
        };

        let text = config.to_string_with_format(Format::Ron).unwrap();
        let parsed = StageConfig::from_str_with_format(&text, Format::Ron).unwrap();

        assert_eq!(parsed, config);
    }
}
