//! # Rocks Engine
//!
//! A small 2D engine core for arcade games: polymorphic actors living on a
//! stage that drives per-frame update and draw passes, exact polygon
//! collision, and wrap-around worlds.
//!
//! ## Features
//!
//! - **Actors**: one trait, generic building blocks (sprite, text, wrap-around)
//! - **Stage**: registry that tolerates mutation while a pass is running
//! - **Collision**: Separating Axis Theorem on transformed bounds
//! - **Rendering seam**: draw to any [`render::Canvas`], record with [`render::DrawList`]
//! - **Configuration**: TOML or RON files through serde
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rocks_engine::prelude::*;
//!
//! fn main() -> Result<(), StageError> {
//!     let stage = Stage::new(&StageConfig::default());
//!     let mut rock = SpriteActor::new(&stage, "rock", FrameId(0))?;
//!     rock.core_mut().set_velocity(Vec2::new(20.0, 0.0));
//!     stage.spawn(WrapAroundActor::from_sprite(rock))?;
//!
//!     let mut canvas = DrawList::new();
//!     stage.update(1.0 / 60.0)?;
//!     stage.draw(&mut canvas);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::must_use_candidate)]

pub mod actor;
pub mod config;
pub mod debug;
pub mod foundation;
pub mod physics;
pub mod render;
pub mod stage;

pub use actor::{Actor, ActorId, ActorRef};
pub use stage::{Stage, StageError, WeakStage};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        actor::{
            Actor, ActorCore, ActorId, ActorRef, BaseActor, DrawContext, SpriteActor, TextActor,
            UpdateContext, WrapAroundActor,
        },
        config::{Config, ConfigError, StageConfig},
        foundation::{
            math::{constants, unit, Point2, Rect, Transform2D, Vec2},
            time::Timer,
        },
        physics::{intersects, ContactMode},
        render::{Canvas, DrawList, FontMetrics, FrameId, HorizontalAlignment},
        stage::{Stage, StageError},
    };
}
