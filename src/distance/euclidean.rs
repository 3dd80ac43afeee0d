//! Euclidean distance.

use crate::models::Point;

/// Straight-line distance between two points.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Point;
/// use u_dispatch::distance::euclidean;
///
/// let d = euclidean(&Point::new(0.0, 0.0), &Point::new(3.0, 4.0));
/// assert!((d - 5.0).abs() < 1e-10);
/// ```
pub fn euclidean(a: &Point, b: &Point) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    (dx * dx + dy * dy).sqrt()
}

/// Sum of distances between consecutive points of a path.
///
/// Zero for paths of fewer than two points.
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| euclidean(&w[0], &w[1])).sum()
}
