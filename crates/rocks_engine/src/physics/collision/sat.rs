//! Separating Axis Theorem overlap test for convex polygons
//!
//! For each edge of both polygons the edge normal is tried as a separating
//! axis: every vertex of both polygons is projected onto it and the two
//! projection intervals are compared. One gap is enough to prove the
//! polygons apart; if no edge separates them they overlap.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{Point2, Vec2};

/// How shapes that exactly touch are classified
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactMode {
    /// Touching boundaries count as a collision
    #[default]
    Inclusive,
    /// Only a positive-area overlap counts as a collision
    Exclusive,
}

impl ContactMode {
    /// Whether the closed intervals `[min_a, max_a]` and `[min_b, max_b]` are apart
    fn separated(self, (min_a, max_a): (f32, f32), (min_b, max_b): (f32, f32)) -> bool {
        match self {
            Self::Inclusive => max_a < min_b || max_b < min_a,
            Self::Exclusive => max_a <= min_b || max_b <= min_a,
        }
    }
}

/// Min and max of the projections of `polygon` onto `axis`
fn project_onto(polygon: &[Point2], axis: &Vec2) -> (f32, f32) {
    polygon.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), p| {
        let projected = axis.dot(&p.coords);
        (min.min(projected), max.max(projected))
    })
}

/// Edge normals of `polygon`, skipping zero-length edges
fn edge_normals(polygon: &[Point2]) -> impl Iterator<Item = Vec2> + '_ {
    let n = polygon.len();
    (0..n).filter_map(move |i| {
        let p1 = polygon[i];
        let p2 = polygon[(i + 1) % n];
        let normal = Vec2::new(p2.y - p1.y, p1.x - p2.x);
        (normal != Vec2::zeros()).then_some(normal)
    })
}

/// Whether two convex polygons overlap
///
/// Polygons that both collapse to a single point have no edge to test; they
/// collide only when the points coincide (and only in inclusive mode).
/// Empty polygons never collide.
pub fn polygons_intersect(a: &[Point2], b: &[Point2], mode: ContactMode) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    let mut tested_any = false;
    for normal in edge_normals(a).chain(edge_normals(b)) {
        tested_any = true;
        if mode.separated(project_onto(a, &normal), project_onto(b, &normal)) {
            return false;
        }
    }

    if !tested_any {
        return mode == ContactMode::Inclusive && a[0] == b[0];
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Rect, Transform2D};
    use crate::foundation::math::constants::QUARTER_PI;
    use crate::physics::collision::{polygon_from_bounds, project_polygon};

    fn square(center: Point2, size: f32) -> Vec<Point2> {
        polygon_from_bounds(&Rect::centered(center, size, size))
    }

    #[test]
    fn test_disjoint_squares() {
        let a = square(Point2::new(0.0, 0.0), 10.0);
        let b = square(Point2::new(100.0, 0.0), 10.0);

        assert!(!polygons_intersect(&a, &b, ContactMode::Inclusive));
    }

    #[test]
    fn test_overlapping_squares() {
        let a = square(Point2::new(0.0, 0.0), 10.0);
        let b = square(Point2::new(5.0, 0.0), 10.0);

        assert!(polygons_intersect(&a, &b, ContactMode::Inclusive));
        assert!(polygons_intersect(&a, &b, ContactMode::Exclusive));
    }

    #[test]
    fn test_touching_depends_on_mode() {
        let a = square(Point2::new(0.0, 0.0), 10.0);
        let b = square(Point2::new(10.0, 0.0), 10.0);

        assert!(polygons_intersect(&a, &b, ContactMode::Inclusive));
        assert!(!polygons_intersect(&a, &b, ContactMode::Exclusive));
    }

    #[test]
    fn test_rotated_square_near_corner() {
        // A diamond whose bounding box overlaps the square but whose edges do not
        let a = square(Point2::new(0.0, 0.0), 10.0);
        let diamond = project_polygon(
            &square(Point2::origin(), 10.0),
            &Transform2D::new(Point2::new(12.0, 12.0), QUARTER_PI, 1.0),
        );

        assert!(!polygons_intersect(&a, &diamond, ContactMode::Inclusive));
    }

    #[test]
    fn test_point_inside_and_outside_square() {
        let a = square(Point2::new(0.0, 0.0), 10.0);

        assert!(polygons_intersect(&a, &[Point2::new(1.0, 1.0); 4], ContactMode::Inclusive));
        assert!(!polygons_intersect(&a, &[Point2::new(6.0, 1.0); 4], ContactMode::Inclusive));
    }

    #[test]
    fn test_two_points() {
        let p = [Point2::new(3.0, 3.0); 4];
        let q = [Point2::new(4.0, 3.0); 4];

        assert!(polygons_intersect(&p, &p, ContactMode::Inclusive));
        assert!(!polygons_intersect(&p, &p, ContactMode::Exclusive));
        assert!(!polygons_intersect(&p, &q, ContactMode::Inclusive));
    }

    #[test]
    fn test_empty_polygon() {
        let a = square(Point2::origin(), 10.0);

        assert!(!polygons_intersect(&a, &[], ContactMode::Inclusive));
    }
}
