//! The player ship

use std::rc::Rc;

use log::debug;
use rocks_engine::actor::{Actor, ActorCore, ActorRef, DrawContext, UpdateContext, WrapAroundActor};
use rocks_engine::foundation::math::{constants, unit, Rect, Vec2};
use rocks_engine::render::FrameId;
use rocks_engine::stage::{Stage, StageError};

use super::rock::Rock;
use super::shot::Shot;
use crate::input::Controls;
use crate::state::GameState;

/// The player ship
///
/// Turns, thrusts and fires according to the controls held this frame. The
/// sprite points up, so the nose is a quarter turn from the rotation angle.
/// Touching a rock destroys the ship and splits the rock.
#[derive(Debug)]
pub struct Ship {
    body: WrapAroundActor,
    state: Rc<GameState>,
    fire_cooldown: f32,
}

impl Ship {
    /// Actor kind of the ship
    pub const KIND: &'static str = "ship";

    /// Create an unmounted ship at the world origin
    pub fn new(stage: &Stage, state: Rc<GameState>) -> Result<Self, StageError> {
        let config = &state.config().ship;
        let mut body = WrapAroundActor::new(stage, Self::KIND, FrameId(config.frame))?;
        body.core_mut().set_scale(config.scale);

        Ok(Self {
            body,
            state,
            fire_cooldown: 0.0,
        })
    }

    /// Create a ship and mount it on `stage`
    pub fn spawn(stage: &Stage, state: Rc<GameState>) -> Result<ActorRef, StageError> {
        stage.spawn(Self::new(stage, state)?)
    }

    /// Sprite frame
    pub fn frame(&self) -> FrameId {
        self.body.sprite().frame()
    }

    /// Unit vector out of the nose
    pub fn heading(&self) -> Vec2 {
        unit(self.rotation() + constants::HALF_PI)
    }

    fn fire(&self, stage: &Stage) -> Result<(), StageError> {
        let config = &self.state.config().shot;
        let heading = self.heading();
        let position = self.position() + heading * config.muzzle_offset;
        let velocity = self.core().velocity() + heading * config.speed;
        Shot::spawn(stage, Rc::clone(&self.state), position, velocity)?;
        Ok(())
    }
}

impl Actor for Ship {
    fn core(&self) -> &ActorCore {
        self.body.core()
    }

    fn core_mut(&mut self) -> &mut ActorCore {
        self.body.core_mut()
    }

    fn update(&mut self, dt: f32, ctx: &UpdateContext<'_>) -> Result<(), StageError> {
        let stage = ctx.stage();
        let controls = self.state.controls();
        let (acceleration, turn_speed, fire_cooldown) = {
            let config = &self.state.config().ship;
            (config.acceleration, config.turn_speed, config.fire_cooldown)
        };

        self.fire_cooldown -= dt;

        if controls.contains(Controls::LEFT) {
            self.core_mut().rotate_by(turn_speed * dt);
        }
        if controls.contains(Controls::RIGHT) {
            self.core_mut().rotate_by(-turn_speed * dt);
        }
        if controls.contains(Controls::THRUST) {
            let thrust = self.heading() * (acceleration * dt);
            self.core_mut().add_velocity(thrust);
        }
        if controls.contains(Controls::FIRE) && self.fire_cooldown <= 0.0 {
            self.fire_cooldown = fire_cooldown;
            self.fire(stage)?;
        }

        self.body.update(dt, ctx)?;

        let hit = stage
            .find_actors_by_kind(Rock::KIND)
            .into_iter()
            .flatten()
            .find(|rock| rock.intersects_actor(&*self, stage.contact_mode()));
        if let Some(rock) = hit {
            debug!("Ship {} hit rock {}", self.id(), rock.id());
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
    use rocks_engine::foundation::math::Point2;

    fn setup() -> (Stage, Rc<GameState>) {
        let config = GameConfig {
            seed: Some(5),
            ..GameConfig::default()
        };
        (Stage::new(&config.stage), Rc::new(GameState::new(config)))
    }

    #[test]
    fn test_turning_and_thrust() {
        let (stage, state) = setup();
        let ship = Ship::spawn(&stage, Rc::clone(&state)).unwrap();

        state.set_controls(Controls::LEFT);
        stage.update(0.1).unwrap();
        assert_relative_eq!(ship.borrow().rotation(), 0.5);

        state.set_controls(Controls::RIGHT);
        stage.update(0.1).unwrap();
        assert_relative_eq!(ship.borrow().rotation(), 0.0);

        state.set_controls(Controls::THRUST);
        stage.update(0.5).unwrap();
        let velocity = ship.borrow().core().velocity();
        assert_relative_eq!(velocity.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(velocity.y, 300.0, epsilon = 1e-3);
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let (stage, state) = setup();
        Ship::spawn(&stage, Rc::clone(&state)).unwrap();
        state.set_controls(Controls::FIRE);

        stage.update(0.05).unwrap();
        stage.update(0.05).unwrap();
        assert_eq!(stage.find_actors_by_kind(Shot::KIND).map(|s| s.len()), Some(1));

        stage.update(0.06).unwrap();
        assert_eq!(stage.find_actors_by_kind(Shot::KIND).map(|s| s.len()), Some(2));
    }

    #[test]
    fn test_shot_leaves_from_the_nose() {
        let (stage, state) = setup();
        Ship::spawn(&stage, Rc::clone(&state)).unwrap();
        state.set_controls(Controls::FIRE);

        stage.update(0.01).unwrap();

        let shots = stage.find_actors_by_kind(Shot::KIND).unwrap();
        let shot = shots[0].borrow();
        assert_relative_eq!(shot.position().x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(shot.position().y, 25.0, epsilon = 1e-4);
        assert_relative_eq!(shot.core().velocity().y, 300.0, epsilon = 1e-3);
    }

    #[test]
    fn test_rock_collision_destroys_ship() {
        let (stage, state) = setup();
        let rock = Rock::spawn(&stage, &state, RockSize::Medium, None).unwrap();
        rock.borrow_mut().core_mut().set_position(Point2::new(10.0, 0.0));
        let ship = Ship::spawn(&stage, Rc::clone(&state)).unwrap();

        stage.update(0.016).unwrap();

        assert!(!ship.is_mounted());
        assert!(!rock.is_mounted());
        assert_eq!(state.score(), 50);
        assert_eq!(stage.find_actors_by_kind(Rock::KIND).map(|r| r.len()), Some(2));
    }
}
