use crate::geometry::Aabb2;
use crate::math::polygon_2d::ring_signed_area;
use crate::math::Point2;

/// A closed loop of points.
///
/// The first point is always repeated as the last one, so a ring with `n`
/// stored points has `n - 1` edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    points: Vec<Point2>,
}

impl Ring {
    /// Creates a ring, appending the first point if the input is open.
    #[must_use]
    pub fn new(mut points: Vec<Point2>) -> Self {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if first != last {
                points.push(first);
            }
        }
        Self { points }
    }

    /// Creates a ring from `(x, y)` coordinate pairs.
    #[must_use]
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Self::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    /// Returns the stored points, closing point included.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Iterates over the edges as `(start, end)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&Point2, &Point2)> {
        self.points.windows(2).map(|e| (&e[0], &e[1]))
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace area; positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        ring_signed_area(&self.points)
    }

    #[must_use]
    pub fn bounding_box(&self) -> Option<Aabb2> {
        Aabb2::from_points(&self.points)
    }
}

impl From<Vec<Point2>> for Ring {
    fn from(points: Vec<Point2>) -> Self {
        Self::new(points)
    }
}
