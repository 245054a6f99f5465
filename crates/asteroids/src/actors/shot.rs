//! Ship projectiles

use std::rc::Rc;

use rocks_engine::actor::{Actor, ActorCore, ActorRef, DrawContext, UpdateContext, WrapAroundActor};
use rocks_engine::foundation::math::{angle_of, Point2, Rect, Vec2};
use rocks_engine::render::FrameId;
use rocks_engine::stage::{Stage, StageError};

use super::rock::Rock;
use crate::state::GameState;

/// A shot fired by the ship
///
/// Flies in a straight line, wraps at the edges and expires after a fixed
/// time. The first rock it touches is split and the shot is spent.
#[derive(Debug)]
pub struct Shot {
    body: WrapAroundActor,
    state: Rc<GameState>,
    timeout: f32,
}

impl Shot {
    /// Actor kind of every shot
    pub const KIND: &'static str = "shot";

    /// Create an unmounted shot heading along `velocity`
    pub fn new(
        stage: &Stage,
        state: Rc<GameState>,
        position: Point2,
        velocity: Vec2,
    ) -> Result<Self, StageError> {
        let config = &state.config().shot;
        let mut body = WrapAroundActor::new(stage, Self::KIND, FrameId(config.frame))?;
        let core = body.core_mut();
        core.set_position(position);
        core.set_velocity(velocity);
        core.set_scale(config.scale);
        core.set_rotation(angle_of(&velocity));
        let timeout = config.timeout;

        Ok(Self { body, state, timeout })
    }

    /// Create a shot and mount it on `stage`
    pub fn spawn(
        stage: &Stage,
        state: Rc<GameState>,
        position: Point2,
        velocity: Vec2,
    ) -> Result<ActorRef, StageError> {
        stage.spawn(Self::new(stage, state, position, velocity)?)
    }

    /// Seconds left before the shot expires
    pub fn timeout(&self) -> f32 {
        self.timeout
    }
}

impl Actor for Shot {
    fn core(&self) -> &ActorCore {
        self.body.core()
    }

    fn core_mut(&mut self) -> &mut ActorCore {
        self.body.core_mut()
    }

    fn update(&mut self, dt: f32, ctx: &UpdateContext<'_>) -> Result<(), StageError> {
        self.timeout -= dt;
        if self.timeout < 0.0 {
            return ctx.remove_self();
        }

        self.body.update(dt, ctx)?;

        let stage = ctx.stage();
        let hit = stage
            .find_actors_by_kind(Rock::KIND)
            .into_iter()
            .flatten()
            .find(|rock| rock.intersects_actor(&*self, stage.contact_mode()));
        if let Some(rock) = hit {
            ctx.remove_self()?;
            Rock::subdivide(&rock, stage, &self.state)?;
        }
        Ok(())
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) {
        self.body.draw(ctx);
    }

    fn bounds(&self) -> Rect {
        self.body.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actors::RockSize;
    use crate::config::GameConfig;
    use approx::assert_relative_eq;
    use rocks_engine::foundation::math::constants;

    fn setup() -> (Stage, Rc<GameState>) {
        let config = GameConfig {
            seed: Some(11),
            ..GameConfig::default()
        };
        (Stage::new(&config.stage), Rc::new(GameState::new(config)))
    }

    #[test]
    fn test_shot_faces_its_velocity() {
        let (stage, state) = setup();
        let shot = Shot::new(&stage, state, Point2::new(1.0, 2.0), Vec2::new(0.0, 5.0)).unwrap();

        assert_relative_eq!(shot.rotation(), constants::HALF_PI);
        assert_eq!(shot.scale(), 0.4);
        assert_eq!(shot.position(), Point2::new(1.0, 2.0));
        assert_eq!(shot.timeout(), 1.5);
    }

    #[test]
    fn test_shot_expires() {
        let (stage, state) = setup();
        let shot = Shot::spawn(&stage, state, Point2::origin(), Vec2::new(5.0, 0.0)).unwrap();

        for _ in 0..6 {
            stage.update(0.25).unwrap();
        }
        assert!(shot.is_mounted());

        stage.update(0.25).unwrap();
        assert!(!shot.is_mounted());
    }

    #[test]
    fn test_default_shot_range() {
        let (stage, state) = setup();
        let speed = state.config().shot.speed;
        let shot = Shot::spawn(&stage, state, Point2::new(-400.0, 0.0), Vec2::new(speed, 0.0)).unwrap();

        let mut travelled = 0.0;
        while shot.is_mounted() {
            let before = shot.borrow().position();
            stage.update(1.0 / 60.0).unwrap();
            if shot.is_mounted() {
                travelled += (shot.borrow().position() - before).norm();
            }
        }

        assert!(travelled > 400.0, "shot travelled {travelled}");
    }

    #[test]
    fn test_shot_splits_rock() {
        let (stage, state) = setup();
        let rock = Rock::spawn(&stage, &state, RockSize::Large, None).unwrap();
        {
            let mut body = rock.borrow_mut();
            body.core_mut().set_velocity(Vec2::zeros());
            body.core_mut().set_position(Point2::origin());
        }
        let shot = Shot::spawn(&stage, Rc::clone(&state), Point2::origin(), Vec2::new(5.0, 0.0)).unwrap();

        stage.update(0.016).unwrap();

        assert!(!shot.is_mounted());
        assert!(!rock.is_mounted());
        assert_eq!(state.score(), 20);
        assert_eq!(stage.find_actors_by_kind(Rock::KIND).map(|r| r.len()), Some(2));
    }
}
