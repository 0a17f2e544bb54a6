// Planar geometry used by the cost model

use super::models::Point;

/// Euclidean distance between two points.
///
/// ```
/// use facloc::domain::{distance, Point};
///
/// assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
/// ```
pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    (dx * dx + dy * dy).sqrt()
}
