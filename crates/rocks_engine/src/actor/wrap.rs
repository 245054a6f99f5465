//! Sprite actor that wraps around the stage edges

use super::{Actor, ActorCore, DrawContext, SpriteActor, UpdateContext};
use crate::foundation::math::Rect;
use crate::render::FrameId;
use crate::stage::{Stage, StageError};

/// A [`SpriteActor`] that reappears on the opposite edge after leaving the
/// stage bounds
#[derive(Debug, Clone)]
pub struct WrapAroundActor {
    sprite: SpriteActor,
}

impl WrapAroundActor {
    /// Create an unmounted wrapping sprite actor
    pub fn new(stage: &Stage, kind: impl Into<String>, frame: FrameId) -> Result<Self, StageError> {
        Ok(Self {
            sprite: SpriteActor::new(stage, kind, frame)?,
        })
    }

    /// Wrap an existing sprite actor
    pub fn from_sprite(sprite: SpriteActor) -> Self {
        Self { sprite }
    }

    /// The underlying sprite actor
    pub fn sprite(&self) -> &SpriteActor {
        &self.sprite
    }

    /// The underlying sprite actor, mutably
    pub fn sprite_mut(&mut self) -> &mut SpriteActor {
        &mut self.sprite
    }
}

impl Actor for WrapAroundActor {
    fn core(&self) -> &ActorCore {
        self.sprite.core()
    }

    fn core_mut(&mut self) -> &mut ActorCore {
        self.sprite.core_mut()
    }

    fn update(&mut self, dt: f32, ctx: &UpdateContext<'_>) -> Result<(), StageError> {
        self.sprite.update(dt, ctx)?;
        self.sprite.core_mut().wrap_within(&ctx.stage().bounds());
        Ok(())
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) {
        self.sprite.draw(ctx);
    }

    fn bounds(&self) -> Rect {
        self.sprite.bounds()
    }
}
