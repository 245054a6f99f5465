//! # Stage
//!
//! The registry that owns the live set of actors for one game instance and
//! drives the per-frame update and draw passes.
//!
//! ## Mutation during a pass
//!
//! Actors add and remove other actors (and themselves) while a pass is
//! running. Both passes therefore iterate over a snapshot of the membership
//! taken when the pass starts, and re-check that each member is still
//! mounted right before visiting it:
//!
//! - an actor removed earlier in the pass is skipped
//! - an actor added during the pass waits for the next pass
//!
//! No borrow of the registry is held while actor code runs.

mod error;

pub use error::StageError;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, error, info, trace};

use crate::actor::{Actor, ActorId, ActorRef, IdAllocator};
use crate::config::StageConfig;
use crate::debug::draw_actor_bounds;
use crate::foundation::math::Rect;
use crate::physics::collision::ContactMode;
use crate::render::{Canvas, FontMetrics, FrameId, SpriteSheet};

struct StageShared {
    bounds: Rect,
    contact: ContactMode,
    sprite_sheet: SpriteSheet,
    font: FontMetrics,
    ids: IdAllocator,
    actors: RefCell<Vec<ActorRef>>,
    draw_actor_bounds: Cell<bool>,
}

/// Handle to an actor registry
///
/// Cloning the handle does not clone the registry; all clones refer to the
/// same stage.
#[derive(Clone)]
pub struct Stage {
    shared: Rc<StageShared>,
}

/// Non-owning reference from a mounted actor back to its stage
#[derive(Clone)]
pub struct WeakStage {
    shared: Weak<StageShared>,
}

impl WeakStage {
    /// Get the stage back if it is still alive
    pub fn upgrade(&self) -> Option<Stage> {
        self.shared.upgrade().map(|shared| Stage { shared })
    }

    /// Whether this refers to `stage`
    pub fn points_to(&self, stage: &Stage) -> bool {
        std::ptr::eq(self.shared.as_ptr(), Rc::as_ptr(&stage.shared))
    }
}

impl Stage {
    /// Create an empty stage, cutting the sprite sheet from configuration
    pub fn new(config: &StageConfig) -> Self {
        Self::with_sprite_sheet(config, SpriteSheet::from_config(&config.sprite_sheet))
    }

    /// Create an empty stage using an explicit sprite sheet
    pub fn with_sprite_sheet(config: &StageConfig, sprite_sheet: SpriteSheet) -> Self {
        let bounds = config.bounds();
        info!(
            "Creating stage {}x{} with {} sprite frames",
            bounds.width(),
            bounds.height(),
            sprite_sheet.len()
        );
        Self {
            shared: Rc::new(StageShared {
                bounds,
                contact: config.contact,
                sprite_sheet,
                font: config.font,
                ids: IdAllocator::new(),
                actors: RefCell::new(Vec::new()),
                draw_actor_bounds: Cell::new(config.draw_actor_bounds),
            }),
        }
    }

    /// Weak handle for back-references
    pub fn downgrade(&self) -> WeakStage {
        WeakStage {
            shared: Rc::downgrade(&self.shared),
        }
    }

    /// Whether both handles refer to the same stage
    pub fn ptr_eq(&self, other: &Stage) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }

    /// World boundary rectangle
    pub fn bounds(&self) -> Rect {
        self.shared.bounds
    }

    /// How touching shapes are classified by this stage's actors
    pub fn contact_mode(&self) -> ContactMode {
        self.shared.contact
    }

    /// Metrics of the text face
    pub fn font_metrics(&self) -> FontMetrics {
        self.shared.font
    }

    /// Rectangle of a sprite sheet frame
    pub fn sprite_frame(&self, frame: FrameId) -> Result<Rect, StageError> {
        self.shared.sprite_sheet.frame(frame).ok_or_else(|| StageError::UnknownFrame {
            frame,
            available: self.shared.sprite_sheet.len(),
        })
    }

    /// Number of frames in the sprite sheet
    pub fn sprite_frame_count(&self) -> usize {
        self.shared.sprite_sheet.len()
    }

    /// Allocate an id for a new actor; ids are never reused by this stage
    pub fn next_actor_id(&self) -> ActorId {
        self.shared.ids.allocate()
    }

    /// Whether the debug bounds overlay is drawn
    pub fn draw_actor_bounds(&self) -> bool {
        self.shared.draw_actor_bounds.get()
    }

    /// Enable or disable the debug bounds overlay
    pub fn set_draw_actor_bounds(&self, enabled: bool) {
        self.shared.draw_actor_bounds.set(enabled);
    }

    /// Flip the debug bounds overlay
    pub fn toggle_draw_actor_bounds(&self) {
        self.set_draw_actor_bounds(!self.draw_actor_bounds());
    }

    /// Remove every actor; id allocation continues where it was
    pub fn reset(&self) {
        let removed = std::mem::take(&mut *self.shared.actors.borrow_mut());
        for actor in &removed {
            actor.set_mount(None);
        }
        debug!("Stage reset, {} actors removed", removed.len());
    }

    /// Mount an actor
    ///
    /// Fails with [`StageError::DuplicateMount`] if an actor with the same id
    /// is already present, or the actor is mounted on any stage, and with
    /// [`StageError::ForeignId`] if the id was not allocated by this stage.
    pub fn add_actor(&self, actor: ActorRef) -> Result<(), StageError> {
        let id = actor.id();
        if actor.is_mounted() || self.contains(id) {
            error!("Actor {} ({}) has already been added", id, actor.kind());
            return Err(StageError::DuplicateMount { id });
        }
        if !self.shared.ids.owns(id) {
            error!("Actor {} ({}) belongs to another stage", id, actor.kind());
            return Err(StageError::ForeignId { id });
        }
        debug!("Adding actor {} ({})", id, actor.kind());
        actor.set_mount(Some(self.downgrade()));
        self.shared.actors.borrow_mut().push(actor);
        Ok(())
    }

    /// Wrap and mount a freshly constructed actor, returning its handle
    pub fn spawn<A: Actor>(&self, actor: A) -> Result<ActorRef, StageError> {
        let handle = ActorRef::new(actor);
        self.add_actor(handle.clone())?;
        Ok(handle)
    }

    /// Unmount an actor, keeping the order of the others
    ///
    /// Fails with [`StageError::MissingUnmount`] if this very actor is not
    /// present; another actor with an equal id does not count.
    pub fn remove_actor(&self, actor: &ActorRef) -> Result<(), StageError> {
        let id = actor.id();
        let removed = {
            let mut actors = self.shared.actors.borrow_mut();
            actors
                .iter()
                .position(|a| a.ptr_eq(actor))
                .map(|index| actors.remove(index))
        };
        match removed {
            Some(removed) => {
                debug!("Removing actor {} ({})", id, removed.kind());
                removed.set_mount(None);
                Ok(())
            }
            None => {
                error!("Actor {} ({}) not found", id, actor.kind());
                Err(StageError::MissingUnmount { id })
            }
        }
    }

    /// Whether an actor with this id is mounted
    pub fn contains(&self, id: ActorId) -> bool {
        self.shared.actors.borrow().iter().any(|a| a.id() == id)
    }

    /// Number of mounted actors
    pub fn len(&self) -> usize {
        self.shared.actors.borrow().len()
    }

    /// Whether no actor is mounted
    pub fn is_empty(&self) -> bool {
        self.shared.actors.borrow().is_empty()
    }

    /// Mounted actors in insertion order
    ///
    /// This is a snapshot: later mutations do not show up in it.
    pub fn actors(&self) -> Vec<ActorRef> {
        self.shared.actors.borrow().clone()
    }

    /// Mounted actors of `kind` in insertion order, or `None` if there are none
    pub fn find_actors_by_kind(&self, kind: &str) -> Option<Vec<ActorRef>> {
        let found: Vec<ActorRef> = self
            .shared
            .actors
            .borrow()
            .iter()
            .filter(|a| a.kind() == kind)
            .cloned()
            .collect();
        (!found.is_empty()).then_some(found)
    }

    /// Update every actor mounted when the pass starts and still mounted
    /// when its turn comes
    ///
    /// Stops at the first actor that reports a registry failure.
    pub fn update(&self, dt: f32) -> Result<(), StageError> {
        let snapshot = self.actors();
        trace!("Update pass over {} actors, dt = {dt}", snapshot.len());
        for actor in &snapshot {
            if actor.is_mounted_on(self) {
                actor.update(dt, self)?;
            }
        }
        Ok(())
    }

    /// Draw every actor with the same snapshot discipline as [`Self::update`],
    /// then the debug bounds overlay if enabled
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let snapshot = self.actors();
        trace!("Draw pass over {} actors", snapshot.len());
        for actor in &snapshot {
            if actor.is_mounted_on(self) {
                actor.draw(self, canvas);
            }
        }

        if self.draw_actor_bounds() {
            draw_actor_bounds(&self.actors(), canvas);
        }
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("bounds", &self.shared.bounds)
            .field("actors", &self.len())
            .field("draw_actor_bounds", &self.draw_actor_bounds())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::BaseActor;

    #[test]
    fn test_ids_are_unique_per_stage() {
        let stage = Stage::new(&StageConfig::default());
        let a = stage.next_actor_id();
        let b = stage.next_actor_id();

        assert_ne!(a, b);
        assert_eq!(a.get(), 1);
    }

    #[test]
    fn test_ids_continue_after_reset() {
        let stage = Stage::new(&StageConfig::default());
        stage.spawn(BaseActor::new(&stage, "rock")).unwrap();

        stage.reset();

        assert_eq!(stage.next_actor_id().get(), 2);
    }

    #[test]
    fn test_weak_stage_follows_lifetime() {
        let stage = Stage::new(&StageConfig::default());
        let other = Stage::new(&StageConfig::default());
        let weak = stage.downgrade();

        assert!(weak.points_to(&stage));
        assert!(!weak.points_to(&other));
        assert!(weak.upgrade().is_some_and(|s| s.ptr_eq(&stage)));

        drop(stage);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_toggle_bounds_overlay() {
        let config = StageConfig {
            draw_actor_bounds: true,
            ..StageConfig::default()
        };
        let stage = Stage::new(&config);

        assert!(stage.draw_actor_bounds());
        stage.toggle_draw_actor_bounds();
        assert!(!stage.draw_actor_bounds());
    }

    #[test]
    fn test_hand_made_ids_are_rejected() {
        let stage = Stage::new(&StageConfig::default());
        let actor = ActorRef::new(BaseActor::with_id(ActorId::new(1), "rock"));

        assert_eq!(
            stage.add_actor(actor.clone()),
            Err(StageError::ForeignId { id: ActorId::new(1) })
        );
        assert!(!actor.is_mounted());
        assert!(stage.is_empty());
    }

    #[test]
    fn test_dropping_stage_unmounts_actors() {
        let stage = Stage::new(&StageConfig::default());
        let rock = stage.spawn(BaseActor::new(&stage, "rock")).unwrap();
        assert!(rock.is_mounted());

        drop(stage);

        assert!(!rock.is_mounted());
        assert!(rock.stage().is_none());
    }
}
