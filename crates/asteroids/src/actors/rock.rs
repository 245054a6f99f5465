//! Rocks
//!
//! Rocks drift and spin across the wrap-around world. Hitting one scores its
//! points and splits it into two rocks of the next size; the smallest rocks
//! just disappear.

use log::{debug, warn};
use rand::Rng;
use rocks_engine::actor::{Actor, ActorCore, ActorRef, DrawContext, UpdateContext, WrapAroundActor};
use rocks_engine::foundation::math::{constants, unit, Point2, Rect};
use rocks_engine::render::FrameId;
use rocks_engine::stage::{Stage, StageError};

use crate::state::GameState;

/// Rock size categories, largest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RockSize {
    /// Spawned at the start of a level (splits into medium)
    Large,

    /// Splits into small
    Medium,

    /// Destroyed completely
    Small,
}

impl RockSize {
    /// The size of the two pieces this one splits into, if any
    pub fn split_into(self) -> Option<RockSize> {
        match self {
            RockSize::Large => Some(RockSize::Medium),
            RockSize::Medium => Some(RockSize::Small),
            RockSize::Small => None,
        }
    }
}

/// A rock
#[derive(Debug, Clone)]
pub struct Rock {
    body: WrapAroundActor,
    size: RockSize,
}

impl Rock {
    /// Actor kind of every rock
    pub const KIND: &'static str = "rock";

    /// Create an unmounted rock with a random heading, spin and position
    ///
    /// The sprite frame is random too unless `frame` is given.
    pub fn new(
        stage: &Stage,
        state: &GameState,
        size: RockSize,
        frame: Option<FrameId>,
    ) -> Result<Self, StageError> {
        let rocks = &state.config().rocks;
        let bounds = stage.bounds();
        let (frame, spin, heading, position) = state.with_rng(|rng| {
            let frame = frame.unwrap_or_else(|| FrameId(rng.gen_range(0..rocks.frame_count.max(1))));
            let spin = if rng.gen_bool(0.5) { rocks.spin } else { -rocks.spin };
            let heading = constants::TAU * rng.gen::<f32>();
            (frame, spin, heading, random_point(rng, &bounds))
        });

        let mut body = WrapAroundActor::new(stage, Self::KIND, frame)?;
        let core = body.core_mut();
        core.set_scale(rocks.scales.get(size));
        core.set_angular_velocity(spin);
        core.set_velocity(unit(heading) * rocks.speed);
        core.set_position(position);

        Ok(Self { body, size })
    }

    /// Create a rock and mount it on `stage`
    pub fn spawn(
        stage: &Stage,
        state: &GameState,
        size: RockSize,
        frame: Option<FrameId>,
    ) -> Result<ActorRef, StageError> {
        stage.spawn(Self::new(stage, state, size, frame)?)
    }

    /// Size category
    pub fn size(&self) -> RockSize {
        self.size
    }

    /// Sprite frame
    pub fn frame(&self) -> FrameId {
        self.body.sprite().frame()
    }

    /// Score a hit on `rock` and break it up
    ///
    /// The rock is unmounted and, unless it was small, replaced by two rocks
    /// of the next size at its position showing the same frame. The new
    /// rocks are first updated on the next pass.
    pub fn subdivide(rock: &ActorRef, stage: &Stage, state: &GameState) -> Result<(), StageError> {
        let Some((size, frame, position)) = rock.with(|r: &Rock| (r.size, r.frame(), r.position())) else {
            warn!("Actor {} of kind '{}' is not a rock", rock.id(), rock.kind());
            return Ok(());
        };

        stage.remove_actor(rock)?;
        state.add_points(state.config().rocks.points.get(size));
        debug!("Rock {} ({size:?}) destroyed", rock.id());

        if let Some(smaller) = size.split_into() {
            for _ in 0..2 {
                let mut piece = Self::new(stage, state, smaller, Some(frame))?;
                piece.core_mut().set_position(position);
                stage.spawn(piece)?;
            }
        }
        Ok(())
    }
}

impl Actor for Rock {
    fn core(&self) -> &ActorCore {
        self.body.core()
    }

    fn core_mut(&mut self) -> &mut ActorCore {
        self.body.core_mut()
    }

    fn update(&mut self, dt: f32, ctx: &UpdateContext<'_>) -> Result<(), StageError> {
        self.body.update(dt, ctx)
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) {
        self.body.draw(ctx);
    }

    fn bounds(&self) -> Rect {
        self.body.bounds()
    }
}

/// Uniformly random point inside `bounds`
fn random_point(rng: &mut impl Rng, bounds: &Rect) -> Point2 {
    Point2::new(
        bounds.min.x + rng.gen::<f32>() * bounds.width(),
        bounds.min.y + rng.gen::<f32>() * bounds.height(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use approx::assert_relative_eq;

    fn setup() -> (Stage, GameState) {
        let config = GameConfig {
            seed: Some(3),
            ..GameConfig::default()
        };
        (Stage::new(&config.stage), GameState::new(config))
    }

    #[test]
    fn test_sizes_split_in_order() {
        assert_eq!(RockSize::Large.split_into(), Some(RockSize::Medium));
        assert_eq!(RockSize::Medium.split_into(), Some(RockSize::Small));
        assert_eq!(RockSize::Small.split_into(), None);
    }

    #[test]
    fn test_new_rock_is_randomized_within_limits() {
        let (stage, state) = setup();

        for _ in 0..20 {
            let rock = Rock::new(&stage, &state, RockSize::Large, None).unwrap();

            assert!(rock.frame().0 < 8);
            assert_eq!(rock.scale(), 5.0);
            assert_relative_eq!(rock.core().angular_velocity().abs(), 0.5);
            assert_relative_eq!(rock.core().velocity().norm(), 60.0, epsilon = 1e-3);
            assert!(stage.bounds().contains(&rock.position()));
        }
    }

    #[test]
    fn test_subdivide_large_rock() {
        let (stage, state) = setup();
        let rock = Rock::spawn(&stage, &state, RockSize::Large, Some(FrameId(3))).unwrap();
        let position = rock.borrow().position();

        Rock::subdivide(&rock, &stage, &state).unwrap();

        assert_eq!(state.score(), 20);
        assert!(!rock.is_mounted());
        let pieces = stage.find_actors_by_kind(Rock::KIND).unwrap();
        assert_eq!(pieces.len(), 2);
        for piece in &pieces {
            piece
                .with(|r: &Rock| {
                    assert_eq!(r.size(), RockSize::Medium);
                    assert_eq!(r.frame(), FrameId(3));
                    assert_eq!(r.position(), position);
                    assert_eq!(r.scale(), 3.0);
                })
                .unwrap();
        }
    }

    #[test]
    fn test_subdivide_small_rock_leaves_nothing() {
        let (stage, state) = setup();
        let rock = Rock::spawn(&stage, &state, RockSize::Small, None).unwrap();

        Rock::subdivide(&rock, &stage, &state).unwrap();

        assert_eq!(state.score(), 100);
        assert!(stage.find_actors_by_kind(Rock::KIND).is_none());
    }

    #[test]
    fn test_subdivide_unmounted_rock_fails() {
        let (stage, state) = setup();
        let rock = ActorRef::new(Rock::new(&stage, &state, RockSize::Medium, None).unwrap());

        assert_eq!(
            Rock::subdivide(&rock, &stage, &state),
            Err(StageError::MissingUnmount { id: rock.id() })
        );
    }
}
