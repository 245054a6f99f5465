//! Math utilities and types
//!
//! Provides the 2D math types used by actors, the stage and collision:
//! nalgebra aliases, an axis-aligned [`Rect`] and the scale/rotate/translate
//! [`Transform2D`] every actor exposes.

pub use nalgebra::{Matrix3, Rotation2, Similarity2, Vector2};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// 3x3 homogeneous matrix type for 2D affine transforms
pub type Mat3 = Matrix3<f32>;

/// Axis-aligned rectangle described by its minimum and maximum corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Corner with the smallest x and y
    pub min: Point2,
    /// Corner with the largest x and y
    pub max: Point2,
}

impl Rect {
    /// Create a rectangle from its corner coordinates
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min: Point2::new(min_x, min_y),
            max: Point2::new(max_x, max_y),
        }
    }

    /// A zero-area rectangle collapsed onto a single point
    pub fn point(at: Point2) -> Self {
        Self { min: at, max: at }
    }

    /// Create a rectangle of the given size centered on `center`
    pub fn centered(center: Point2, width: f32, height: f32) -> Self {
        let half = Vec2::new(width / 2.0, height / 2.0);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Width along the x axis
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height along the y axis
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Center point
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Returns a copy translated by `offset`
    pub fn moved(&self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Returns a copy with both corners scaled about the origin
    pub fn scaled(&self, scale: f32) -> Self {
        Self {
            min: self.min * scale,
            max: self.max * scale,
        }
    }

    /// Whether `point` lies inside or on the edge of the rectangle
    pub fn contains(&self, point: &Point2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Whether the two rectangles overlap (touching edges count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}

/// Transform representing position, rotation, and uniform scale in 2D
///
/// Points are mapped by scaling about the local origin, then rotating about
/// the local origin, then translating to `position`. That order is part of
/// the actor contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    /// Translation applied last
    pub position: Point2,

    /// Counter-clockwise rotation in radians
    pub rotation: f32,

    /// Uniform scale factor
    pub scale: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            position: Point2::origin(),
            rotation: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform2D {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform from all three components
    pub fn new(position: Point2, rotation: f32, scale: f32) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Convert to a homogeneous transformation matrix
    pub fn to_matrix(&self) -> Mat3 {
        Mat3::new_translation(&self.position.coords)
            * Rotation2::new(self.rotation).to_homogeneous()
            * Mat3::new_nonuniform_scaling(&Vec2::new(self.scale, self.scale))
    }

    /// Convert to an nalgebra similarity (same mapping as [`Self::to_matrix`])
    pub fn to_similarity(&self) -> Similarity2<f32> {
        Similarity2::new(self.position.coords, self.rotation, self.scale)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: &Point2) -> Point2 {
        let rotated = Rotation2::new(self.rotation) * (point.coords * self.scale);
        self.position + rotated
    }

    /// Returns a copy that additionally translates by `offset` in world space
    pub fn moved(&self, offset: Vec2) -> Self {
        Self {
            position: self.position + offset,
            ..*self
        }
    }
}

/// Bring a point that left `bounds` back in on the opposite edge
///
/// Each axis is handled independently. Crossing the minimum edge teleports
/// to the maximum edge and vice versa; a point exactly on an edge stays put.
pub fn wrap_around(point: &mut Point2, bounds: &Rect) {
    if point.x < bounds.min.x {
        point.x = bounds.max.x;
    } else if point.x > bounds.max.x {
        point.x = bounds.min.x;
    }
    if point.y < bounds.min.y {
        point.y = bounds.max.y;
    } else if point.y > bounds.max.y {
        point.y = bounds.min.y;
    }
}

/// Unit vector pointing along `angle` radians
pub fn unit(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Angle of a vector in radians, measured from the positive x axis
pub fn angle_of(vector: &Vec2) -> f32 {
    vector.y.atan2(vector.x)
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Pi / 4
    pub const QUARTER_PI: f32 = PI * 0.25;
}
