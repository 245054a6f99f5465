//! Convex polygons and their placement in world space

use crate::foundation::math::{Point2, Rect, Transform2D};

/// Ordered vertex list of a convex polygon
pub type Polygon = Vec<Point2>;

/// Corners of an axis-aligned rectangle as a polygon
///
/// Winding is fixed: the min corner, then (min.x, max.y), then the max
/// corner, then (max.x, min.y). A zero-area rectangle yields four copies of
/// the same point.
pub fn polygon_from_bounds(rect: &Rect) -> Polygon {
    vec![
        rect.min,
        Point2::new(rect.min.x, rect.max.y),
        rect.max,
        Point2::new(rect.max.x, rect.min.y),
    ]
}

/// Map every vertex of `polygon` through `transform`
pub fn project_polygon(polygon: &[Point2], transform: &Transform2D) -> Polygon {
    polygon.iter().map(|v| transform.transform_point(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::HALF_PI;
    use approx::assert_relative_eq;

    #[test]
    fn test_winding_order() {
        let polygon = polygon_from_bounds(&Rect::new(1.0, 2.0, 3.0, 5.0));

        assert_eq!(
            polygon,
            vec![
                Point2::new(1.0, 2.0),
                Point2::new(1.0, 5.0),
                Point2::new(3.0, 5.0),
                Point2::new(3.0, 2.0),
            ]
        );
    }

    #[test]
    fn test_identity_projection_keeps_corners() {
        let rects = [
            Rect::new(-5.0, -5.0, 5.0, 5.0),
            Rect::new(0.0, 0.0, 0.0, 0.0),
            Rect::new(-100.5, 3.25, 7.0, 9.5),
        ];

        for rect in rects {
            let polygon = polygon_from_bounds(&rect);
            assert_eq!(project_polygon(&polygon, &Transform2D::identity()), polygon);
        }
    }

    #[test]
    fn test_point_rect_collapses() {
        let p = Point2::new(4.0, -1.0);
        let polygon = polygon_from_bounds(&Rect::point(p));

        assert!(polygon.iter().all(|v| *v == p));
    }

    #[test]
    fn test_projection_scales_rotates_translates() {
        let polygon = polygon_from_bounds(&Rect::new(-1.0, -1.0, 1.0, 1.0));
        let transform = Transform2D::new(Point2::new(10.0, 20.0), HALF_PI, 3.0);
        let projected = project_polygon(&polygon, &transform);

        // min corner (-1,-1) -> (-3,-3) -> rotated (3,-3) -> (13,17)
        assert_relative_eq!(projected[0].x, 13.0, epsilon = 1e-4);
        assert_relative_eq!(projected[0].y, 17.0, epsilon = 1e-4);
    }
}
