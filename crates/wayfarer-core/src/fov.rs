//! Field of view: a fixed 5×5 sight mask centered on the observer.
//!
//! The mask keeps the center, the edge midpoints and everything in between,
//! and drops the four corners:
//!
//! ```text
//! . # # # .
//! # # # # #
//! # # @ # #
//! # # # # #
//! . # # # .
//! ```

use crate::geom::{Point, Range};

/// Distance from the center to the mask edge.
pub const SIGHT_RADIUS: i32 = 2;

/// Sight mask, indexed `[dy + 2][dx + 2]`.
pub const SIGHT_MASK: [[bool; 5]; 5] = [
    [false, true, true, true, false],
    [true, true, true, true, true],
    [true, true, true, true, true],
    [true, true, true, true, true],
    [false, true, true, true, false],
];

/// Whether the offset (dx, dy) from the observer is inside the mask.
#[inline]
pub fn in_sight(dx: i32, dy: i32) -> bool {
    if dx.abs() > SIGHT_RADIUS || dy.abs() > SIGHT_RADIUS {
        return false;
    }
    SIGHT_MASK[(dy + SIGHT_RADIUS) as usize][(dx + SIGHT_RADIUS) as usize]
}

/// Points visible from `center`, clipped to `bounds`, in row-major order.
pub fn visible_points(center: Point, bounds: Range) -> impl Iterator<Item = Point> {
    Range::new(-SIGHT_RADIUS, -SIGHT_RADIUS, SIGHT_RADIUS + 1, SIGHT_RADIUS + 1)
        .iter()
        .filter(|d| in_sight(d.x, d.y))
        .map(move |d| center + d)
        .filter(move |p| bounds.contains(*p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_has_21_cells() {
        let bounds = Range::new(0, 0, 30, 15);
        assert_eq!(visible_points(Point::new(10, 7), bounds).count(), 21);
    }

    #[test]
    fn corners_are_excluded() {
        for (dx, dy) in [(-2, -2), (2, -2), (-2, 2), (2, 2)] {
            assert!(!in_sight(dx, dy));
        }
        assert!(in_sight(0, 0));
        assert!(in_sight(0, -2));
        assert!(in_sight(-2, 0));
        assert!(in_sight(1, -2));
        assert!(!in_sight(3, 0));
    }

    #[test]
    fn clipped_at_origin() {
        let bounds = Range::new(0, 0, 30, 15);
        let pts: Vec<Point> = visible_points(Point::ZERO, bounds).collect();
        // Bottom-right quadrant of the mask, minus the corner.
        assert_eq!(pts.len(), 8);
        assert!(pts.iter().all(|p| bounds.contains(*p)));
        assert!(!pts.contains(&Point::new(2, 2)));
    }
}
