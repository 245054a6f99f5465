//! Actors - the polymorphic entities living on a [`Stage`]
//!
//! Every kind implements the [`Actor`] trait. Shared state and the default
//! behavior live in [`ActorCore`]; the generic kinds here ([`BaseActor`],
//! [`SpriteActor`], [`TextActor`], [`WrapAroundActor`]) are building blocks
//! that game-specific kinds embed and delegate to.
//!
//! Actors are constructed unmounted, wrapped in an [`ActorRef`] and handed
//! to [`Stage::add_actor`]. The stage owns membership; the actor only keeps
//! a weak handle back to the stage it is mounted on.

pub mod base;
pub mod core;
pub mod handle;
pub mod sprite;
pub mod text;
pub mod wrap;

pub use self::base::BaseActor;
pub use self::core::{ActorCore, ActorId, IdAllocator};
pub use self::handle::ActorRef;
pub use self::sprite::SpriteActor;
pub use self::text::TextActor;
pub use self::wrap::WrapAroundActor;

use std::any::Any;

use crate::foundation::math::{Point2, Rect, Transform2D};
use crate::render::Canvas;
use crate::stage::{Stage, StageError};

/// Upcast to [`Any`] for downcasting trait objects to their concrete kind
pub trait AsAny: Any {
    /// Borrow as `&dyn Any`
    fn as_any(&self) -> &dyn Any;

    /// Borrow as `&mut dyn Any`
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Capability set of every actor kind
pub trait Actor: AsAny {
    /// Shared identity and spatial state
    fn core(&self) -> &ActorCore;

    /// Mutable shared state
    fn core_mut(&mut self) -> &mut ActorCore;

    /// Advance one frame
    ///
    /// The default integrates position and rotation. Kinds that spawn or
    /// remove actors do so through `ctx` and propagate registry failures.
    fn update(&mut self, dt: f32, _ctx: &UpdateContext<'_>) -> Result<(), StageError> {
        self.core_mut().integrate(dt);
        Ok(())
    }

    /// Render at the current world transform; nothing by default
    fn draw(&self, _ctx: &mut DrawContext<'_>) {}

    /// Bounding rectangle in local, untransformed space
    fn bounds(&self) -> Rect {
        self.core().point_bounds()
    }

    /// Local bounds scaled and moved to the world position, ignoring rotation
    fn scaled_bounds(&self) -> Rect {
        let core = self.core();
        self.bounds().scaled(core.scale()).moved(core.position().coords)
    }

    /// Identity
    fn id(&self) -> ActorId {
        self.core().id()
    }

    /// Category label
    fn kind(&self) -> &str {
        self.core().kind()
    }

    /// World position
    fn position(&self) -> Point2 {
        self.core().position()
    }

    /// Uniform scale
    fn scale(&self) -> f32 {
        self.core().scale()
    }

    /// Rotation in radians
    fn rotation(&self) -> f32 {
        self.core().rotation()
    }

    /// Scale, then rotate, then translate
    fn transform(&self) -> Transform2D {
        self.core().transform()
    }
}

/// What an actor sees while it updates
pub struct UpdateContext<'a> {
    stage: &'a Stage,
    this: &'a ActorRef,
}

impl<'a> UpdateContext<'a> {
    pub(crate) fn new(stage: &'a Stage, this: &'a ActorRef) -> Self {
        Self { stage, this }
    }

    /// The stage running the pass
    pub fn stage(&self) -> &'a Stage {
        self.stage
    }

    /// Handle of the actor being updated
    ///
    /// Do not borrow the body through it: the body is already borrowed
    /// mutably for the duration of the update.
    pub fn this(&self) -> &'a ActorRef {
        self.this
    }

    /// Unmount the actor being updated; later passes skip it
    pub fn remove_self(&self) -> Result<(), StageError> {
        self.stage.remove_actor(self.this)
    }
}

/// What an actor sees while it draws
pub struct DrawContext<'a> {
    stage: &'a Stage,
    canvas: &'a mut dyn Canvas,
}

impl<'a> DrawContext<'a> {
    pub(crate) fn new(stage: &'a Stage, canvas: &'a mut dyn Canvas) -> Self {
        Self { stage, canvas }
    }

    /// The stage running the pass
    pub fn stage(&self) -> &'a Stage {
        self.stage
    }

    /// Surface to draw on
    pub fn canvas(&mut self) -> &mut dyn Canvas {
        &mut *self.canvas
    }
}
