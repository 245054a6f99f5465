//! Actor drawn as a block of text

use super::{Actor, ActorCore, DrawContext};
use crate::foundation::math::{Point2, Rect, Vec2};
use crate::render::{FontMetrics, HorizontalAlignment};
use crate::stage::Stage;

/// Actor whose visual is a text block in the stage's fixed-width face
#[derive(Debug, Clone)]
pub struct TextActor {
    core: ActorCore,
    text: String,
    alignment: HorizontalAlignment,
    font: FontMetrics,
}

impl TextActor {
    /// Create an unmounted, empty text actor at `position`
    pub fn new(stage: &Stage, kind: impl Into<String>, position: Point2) -> Self {
        let mut core = ActorCore::new(stage, kind);
        core.set_position(position);
        Self::from_parts(core, stage.font_metrics())
    }

    /// Create a text actor from a prepared core and font
    pub fn from_parts(core: ActorCore, font: FontMetrics) -> Self {
        Self {
            core,
            text: String::new(),
            alignment: HorizontalAlignment::Left,
            font,
        }
    }

    /// Current text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Horizontal alignment
    pub fn alignment(&self) -> HorizontalAlignment {
        self.alignment
    }

    /// Set the horizontal alignment
    pub fn set_alignment(&mut self, alignment: HorizontalAlignment) {
        self.alignment = alignment;
    }
}

impl Actor for TextActor {
    fn core(&self) -> &ActorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ActorCore {
        &mut self.core
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let mut transform = self.core.transform();
        if self.alignment == HorizontalAlignment::Center {
            let width = self.font.text_bounds(&self.text).width() * self.core.scale();
            transform = transform.moved(Vec2::new(-width / 2.0, 0.0));
        }
        ctx.canvas().draw_text(&self.text, &transform);
    }

    fn bounds(&self) -> Rect {
        self.font.aligned_bounds(&self.text, self.alignment)
    }

    /// Text-sized box scaled and centered on the position
    fn scaled_bounds(&self) -> Rect {
        let bounds = self.font.text_bounds(&self.text);
        let scale = self.core.scale();
        Rect::centered(self.core.position(), bounds.width() * scale, bounds.height() * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::ActorId;

    fn label(text: &str) -> TextActor {
        let mut actor = TextActor::from_parts(ActorCore::with_id(ActorId::new(1), "text"), FontMetrics::default());
        actor.set_text(text);
        actor
    }

    #[test]
    fn test_bounds_grow_with_text() {
        let short = label("1");
        let long = label("12345");

        assert_eq!(short.bounds().width(), 7.0);
        assert_eq!(long.bounds().width(), 35.0);
    }

    #[test]
    fn test_centered_bounds() {
        let mut actor = label("1234");
        actor.set_alignment(HorizontalAlignment::Center);

        assert_eq!(actor.bounds().min.x, -14.0);
        assert_eq!(actor.bounds().max.x, 14.0);
    }

    #[test]
    fn test_scaled_bounds() {
        let mut actor = label("12");
        actor.core_mut().set_scale(2.0);
        actor.core_mut().set_position(Point2::new(10.0, 100.0));

        // 14x13 text doubled to 28x26 around (10, 100)
        assert_eq!(actor.scaled_bounds(), Rect::new(-4.0, 87.0, 24.0, 113.0));
    }

    #[test]
    fn test_scaled_bounds_ignore_alignment() {
        let mut actor = label("1234");
        actor.core_mut().set_position(Point2::new(0.0, 0.0));
        let left = actor.scaled_bounds();
        actor.set_alignment(HorizontalAlignment::Center);

        assert_eq!(actor.scaled_bounds(), left);
        assert_eq!(left.center(), Point2::origin());
    }
}
