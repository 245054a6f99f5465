//! Sprite atlas layout

use crate::config::SpriteSheetConfig;
use crate::foundation::math::Rect;

/// Index of a frame inside a [`SpriteSheet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub usize);

/// Frame rectangles of a sprite atlas
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpriteSheet {
    frames: Vec<Rect>,
}

impl SpriteSheet {
    /// Build a sheet from explicit frame rectangles
    pub fn from_frames(frames: Vec<Rect>) -> Self {
        Self { frames }
    }

    /// Cut a `width` x `height` atlas into square cells
    ///
    /// Frames are numbered column by column: all cells of the first column
    /// bottom to top, then the next column.
    pub fn grid(width: f32, height: f32, cell_size: f32) -> Self {
        let mut frames = Vec::new();
        if cell_size <= 0.0 {
            return Self { frames };
        }
        let mut x = 0.0;
        while x + cell_size <= width {
            let mut y = 0.0;
            while y + cell_size <= height {
                frames.push(Rect::new(x, y, x + cell_size, y + cell_size));
                y += cell_size;
            }
            x += cell_size;
        }
        Self { frames }
    }

    /// Cut a sheet according to configuration
    pub fn from_config(config: &SpriteSheetConfig) -> Self {
        Self::grid(config.width, config.height, config.cell_size)
    }

    /// Frame rectangle by index
    pub fn frame(&self, frame: FrameId) -> Option<Rect> {
        self.frames.get(frame.0).copied()
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the sheet has no frames
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_is_column_major() {
        let sheet = SpriteSheet::grid(64.0, 96.0, 32.0);

        assert_eq!(sheet.len(), 6);
        assert_eq!(sheet.frame(FrameId(0)), Some(Rect::new(0.0, 0.0, 32.0, 32.0)));
        assert_eq!(sheet.frame(FrameId(1)), Some(Rect::new(0.0, 32.0, 32.0, 64.0)));
        assert_eq!(sheet.frame(FrameId(3)), Some(Rect::new(32.0, 0.0, 64.0, 32.0)));
        assert_eq!(sheet.frame(FrameId(6)), None);
    }

    #[test]
    fn test_partial_cells_are_dropped() {
        let sheet = SpriteSheet::grid(70.0, 40.0, 32.0);

        assert_eq!(sheet.len(), 2);
    }

    #[test]
    fn test_zero_cell_size_yields_empty_sheet() {
        assert!(SpriteSheet::grid(64.0, 64.0, 0.0).is_empty());
    }
}
