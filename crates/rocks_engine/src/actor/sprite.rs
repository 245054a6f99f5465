//! Actor drawn as a sprite atlas frame

use super::{Actor, ActorCore, DrawContext};
use crate::foundation::math::{Point2, Rect};
use crate::render::FrameId;
use crate::stage::{Stage, StageError};

/// Actor whose visual is one frame of the stage's sprite sheet
///
/// Local bounds are a frame-sized box centered on the local origin.
#[derive(Debug, Clone)]
pub struct SpriteActor {
    core: ActorCore,
    frame: FrameId,
    frame_rect: Rect,
}

impl SpriteActor {
    /// Create an unmounted sprite actor showing `frame`
    ///
    /// Fails with [`StageError::UnknownFrame`] when the stage's sprite sheet
    /// has no such frame.
    pub fn new(stage: &Stage, kind: impl Into<String>, frame: FrameId) -> Result<Self, StageError> {
        let frame_rect = stage.sprite_frame(frame)?;
        Ok(Self {
            core: ActorCore::new(stage, kind),
            frame,
            frame_rect,
        })
    }

    /// Create a sprite actor from a prepared core and frame rectangle
    pub fn from_parts(core: ActorCore, frame: FrameId, frame_rect: Rect) -> Self {
        Self {
            core,
            frame,
            frame_rect,
        }
    }

    /// Atlas frame being shown
    pub fn frame(&self) -> FrameId {
        self.frame
    }

    /// Switch to another atlas frame of `stage`
    pub fn set_frame(&mut self, stage: &Stage, frame: FrameId) -> Result<(), StageError> {
        self.frame_rect = stage.sprite_frame(frame)?;
        self.frame = frame;
        Ok(())
    }

    /// Unscaled frame width
    pub fn frame_width(&self) -> f32 {
        self.frame_rect.width()
    }

    /// Unscaled frame height
    pub fn frame_height(&self) -> f32 {
        self.frame_rect.height()
    }
}

impl Actor for SpriteActor {
    fn core(&self) -> &ActorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ActorCore {
        &mut self.core
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) {
        ctx.canvas().draw_sprite(self.frame, &self.core.transform());
    }

    fn bounds(&self) -> Rect {
        Rect::centered(Point2::origin(), self.frame_width(), self.frame_height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::ActorId;

    fn sprite(width: f32, height: f32) -> SpriteActor {
        SpriteActor::from_parts(
            ActorCore::with_id(ActorId::new(1), "rock"),
            FrameId(0),
            Rect::new(0.0, 0.0, width, height),
        )
    }

    #[test]
    fn test_bounds_centered_on_origin() {
        let actor = sprite(32.0, 16.0);

        assert_eq!(actor.bounds(), Rect::new(-16.0, -8.0, 16.0, 8.0));
    }

    #[test]
    fn test_scaled_bounds_follow_scale_and_position() {
        let mut actor = sprite(32.0, 16.0);
        actor.core_mut().set_scale(2.0);
        actor.core_mut().set_position(Point2::new(100.0, 50.0));
        actor.core_mut().set_rotation(1.0);

        assert_eq!(actor.scaled_bounds(), Rect::new(68.0, 34.0, 132.0, 66.0));
    }
}
