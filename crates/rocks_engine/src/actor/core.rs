//! Identity and spatial state shared by every actor kind

use std::cell::Cell;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::foundation::math::{wrap_around, Point2, Rect, Transform2D, Vec2};
use crate::stage::Stage;

/// Id space of hand-made ids; allocators never use it
const MANUAL_SPACE: u32 = 0;

static NEXT_SPACE: AtomicU32 = AtomicU32::new(MANUAL_SPACE + 1);

/// Actor identifier
///
/// Tagged with the id space of the [`IdAllocator`] that produced it, so ids
/// from two stages never compare equal even when their numbers match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId {
    space: u32,
    raw: u64,
}

impl ActorId {
    /// Wrap a raw id value outside of any allocator
    pub const fn new(raw: u64) -> Self {
        Self {
            space: MANUAL_SPACE,
            raw,
        }
    }

    /// Get the raw id value
    pub const fn get(self) -> u64 {
        self.raw
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.raw)
    }
}

/// Monotonic id source; ids start at 1 and are never handed out twice
///
/// Each allocator owns a fresh id space, so the numbers of independent
/// allocators overlap while the ids themselves stay distinct.
#[derive(Debug)]
pub struct IdAllocator {
    space: u32,
    next: Cell<u64>,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    /// Create an allocator whose first id is 1
    pub fn new() -> Self {
        Self {
            space: NEXT_SPACE.fetch_add(1, Ordering::Relaxed),
            next: Cell::new(1),
        }
    }

    /// Hand out the next id
    pub fn allocate(&self) -> ActorId {
        let raw = self.next.get();
        self.next.set(raw + 1);
        ActorId {
            space: self.space,
            raw,
        }
    }

    /// Whether `id` was handed out by this allocator's space
    pub fn owns(&self, id: ActorId) -> bool {
        id.space == self.space
    }
}

/// Identity, kind and motion state of an actor
///
/// Every concrete kind embeds one of these and exposes it through
/// [`Actor::core`](super::Actor::core); the default actor behavior
/// (integration, transform, point bounds) is implemented here once.
#[derive(Debug, Clone)]
pub struct ActorCore {
    id: ActorId,
    kind: String,
    position: Point2,
    rotation: f32,
    scale: f32,
    velocity: Vec2,
    angular_velocity: f32,
}

impl ActorCore {
    /// Create the core of a new, unmounted actor with an id from `stage`
    pub fn new(stage: &Stage, kind: impl Into<String>) -> Self {
        Self::with_id(stage.next_actor_id(), kind)
    }

    /// Create a core with an explicit id
    pub fn with_id(id: ActorId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
            position: Point2::origin(),
            rotation: 0.0,
            scale: 1.0,
            velocity: Vec2::zeros(),
            angular_velocity: 0.0,
        }
    }

    /// Identity
    pub fn id(&self) -> ActorId {
        self.id
    }

    /// Category label
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// World position
    pub fn position(&self) -> Point2 {
        self.position
    }

    /// Set the world position
    pub fn set_position(&mut self, position: Point2) {
        self.position = position;
    }

    /// Rotation in radians
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Set the rotation in radians
    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
    }

    /// Add `delta` radians to the rotation
    pub fn rotate_by(&mut self, delta: f32) {
        self.rotation += delta;
    }

    /// Uniform scale
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Set the uniform scale; must be positive
    pub fn set_scale(&mut self, scale: f32) {
        debug_assert!(scale > 0.0, "actor scale must be positive, got {scale}");
        self.scale = scale;
    }

    /// Linear velocity in units per second
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Set the linear velocity
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Add to the linear velocity
    pub fn add_velocity(&mut self, delta: Vec2) {
        self.velocity += delta;
    }

    /// Angular velocity in radians per second
    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    /// Set the angular velocity
    pub fn set_angular_velocity(&mut self, angular_velocity: f32) {
        self.angular_velocity = angular_velocity;
    }

    /// Advance position and rotation by `dt` seconds
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        self.rotation += self.angular_velocity * dt;
    }

    /// Teleport to the opposite edge if the position left `bounds`
    pub fn wrap_within(&mut self, bounds: &Rect) {
        wrap_around(&mut self.position, bounds);
    }

    /// Scale, then rotation, then translation to the world position
    pub fn transform(&self) -> Transform2D {
        Transform2D::new(self.position, self.rotation, self.scale)
    }

    /// Zero-area local bounds of a kind without a visual
    pub fn point_bounds(&self) -> Rect {
        Rect::point(Point2::origin())
    }
}
