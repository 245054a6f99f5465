//! Score display

use std::rc::Rc;

use rocks_engine::actor::{Actor, ActorCore, DrawContext, TextActor, UpdateContext};
use rocks_engine::foundation::math::{Point2, Rect};
use rocks_engine::render::HorizontalAlignment;
use rocks_engine::stage::{Stage, StageError};

use crate::state::GameState;

/// The score, centered at the top of the world
#[derive(Debug)]
pub struct ScoreDisplay {
    text: TextActor,
    state: Rc<GameState>,
}

impl ScoreDisplay {
    /// Actor kind of the score display
    pub const KIND: &'static str = "score";

    /// Create an unmounted score display
    pub fn new(stage: &Stage, state: Rc<GameState>) -> Self {
        let hud = &state.config().hud;
        let position = Point2::new(0.0, stage.bounds().max.y - hud.score_offset);
        let mut text = TextActor::new(stage, Self::KIND, position);
        text.core_mut().set_scale(hud.score_scale);
        text.set_alignment(HorizontalAlignment::Center);
        text.set_text(state.score().to_string());

        Self { text, state }
    }

    /// Text currently shown
    pub fn text(&self) -> &str {
        self.text.text()
    }
}

impl Actor for ScoreDisplay {
    fn core(&self) -> &ActorCore {
        self.text.core()
    }

    fn core_mut(&mut self) -> &mut ActorCore {
        self.text.core_mut()
    }

    fn update(&mut self, dt: f32, ctx: &UpdateContext<'_>) -> Result<(), StageError> {
        self.text.set_text(self.state.score().to_string());
        self.text.update(dt, ctx)
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) {
        self.text.draw(ctx);
    }

    fn bounds(&self) -> Rect {
        self.text.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rocks_engine::render::{DrawCommand, DrawList};

    #[test]
    fn test_shows_current_score_centered() {
        let config = GameConfig::default();
        let stage = Stage::new(&config.stage);
        let state = Rc::new(GameState::new(config));
        let score = stage.spawn(ScoreDisplay::new(&stage, Rc::clone(&state))).unwrap();

        state.add_points(150);
        stage.update(0.016).unwrap();
        let mut canvas = DrawList::new();
        stage.draw(&mut canvas);

        assert_eq!(score.with(|s: &ScoreDisplay| s.text().to_owned()), Some("150".to_owned()));
        match &canvas.commands()[0] {
            DrawCommand::Text { text, transform } => {
                assert_eq!(text, "150");
                // three 7-unit glyphs at scale 2, shifted left by half
                assert_eq!(transform.position, Point2::new(-21.0, 354.0));
                assert_eq!(transform.scale, 2.0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
