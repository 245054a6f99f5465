//! Remaining lives display

use std::rc::Rc;

use rocks_engine::actor::{Actor, ActorCore, DrawContext};
use rocks_engine::foundation::math::{Point2, Vec2};
use rocks_engine::stage::Stage;

use super::ship::Ship;
use crate::state::GameState;

/// A row of ship icons, one per life, in the top-left corner
///
/// Shows the ship's own sprite, so nothing is drawn while no ship is in
/// play.
#[derive(Debug)]
pub struct LivesDisplay {
    core: ActorCore,
    state: Rc<GameState>,
}

impl LivesDisplay {
    /// Actor kind of the lives display
    pub const KIND: &'static str = "lives";

    /// Create an unmounted lives display
    pub fn new(stage: &Stage, state: Rc<GameState>) -> Self {
        let bounds = stage.bounds();
        let [dx, dy] = state.config().hud.lives_offset;
        let mut core = ActorCore::new(stage, Self::KIND);
        core.set_position(Point2::new(bounds.min.x + dx, bounds.max.y - dy));

        Self { core, state }
    }
}

impl Actor for LivesDisplay {
    fn core(&self) -> &ActorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ActorCore {
        &mut self.core
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let Some(ships) = ctx.stage().find_actors_by_kind(Ship::KIND) else {
            return;
        };
        let Some(frame) = ships[0].with(Ship::frame) else {
            return;
        };

        let spacing = self.state.config().hud.lives_spacing;
        let transform = self.transform();
        for i in 0..self.state.lives() {
            let icon = transform.moved(Vec2::new(i as f32 * spacing, 0.0));
            ctx.canvas().draw_sprite(frame, &icon);
        }
    }
}
