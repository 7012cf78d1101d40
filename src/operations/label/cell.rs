use std::cmp::Ordering;
use std::f64::consts::SQRT_2;

use crate::geometry::Polygon;
use crate::math::Point2;

/// A square search region and its distance estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Center of the square.
    pub center: Point2,
    /// Half the side length.
    pub half_size: f64,
    /// Signed distance from `center` to the polygon boundary.
    pub distance: f64,
    /// Upper bound on the signed distance of any point inside the cell.
    pub max_distance: f64,
}

impl Cell {
    /// Evaluates the polygon's distance field at `center`.
    #[must_use]
    pub fn new(center: Point2, half_size: f64, polygon: &Polygon) -> Self {
        let distance = polygon.signed_distance(&center);
        Self {
            center,
            half_size,
            distance,
            max_distance: distance + half_size * SQRT_2,
        }
    }

    /// Splits the cell into its four quadrants.
    #[must_use]
    pub fn subdivide(&self, polygon: &Polygon) -> [Self; 4] {
        let h = self.half_size / 2.0;
        let (x, y) = (self.center.x, self.center.y);
        [
            Self::new(Point2::new(x - h, y - h), h, polygon),
            Self::new(Point2::new(x + h, y - h), h, polygon),
            Self::new(Point2::new(x - h, y + h), h, polygon),
            Self::new(Point2::new(x + h, y + h), h, polygon),
        ]
    }
}

/// Heap entry ordering cells by `max_distance`.
///
/// Equal bounds pop in insertion order, which keeps the heap order total and
/// the search reproducible.
#[derive(Debug, Clone, Copy)]
pub(crate) struct QueuedCell {
    pub cell: Cell,
    pub seq: u64,
}

impl PartialEq for QueuedCell {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueuedCell {}

impl PartialOrd for QueuedCell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueuedCell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cell
            .max_distance
            .total_cmp(&other.cell.max_distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Ring;
    use approx::assert_relative_eq;
    use std::collections::BinaryHeap;

    fn square() -> Polygon {
        Polygon::from_exterior(Ring::from_coords(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 4.0),
            (0.0, 4.0),
        ]))
    }

    #[test]
    fn bound_adds_half_diagonal() {
        let cell = Cell::new(Point2::new(1.0, 2.0), 0.5, &square());
        assert_relative_eq!(cell.distance, 1.0);
        assert_relative_eq!(cell.max_distance, 1.0 + 0.5 * SQRT_2);
    }

    #[test]
    fn zero_size_cell_bound_is_distance() {
        let cell = Cell::new(Point2::new(2.0, 2.0), 0.0, &square());
        assert_eq!(cell.max_distance, cell.distance);
    }

    #[test]
    fn outside_cell_has_negative_distance() {
        let cell = Cell::new(Point2::new(6.0, 2.0), 1.0, &square());
        assert_relative_eq!(cell.distance, -2.0);
    }

    #[test]
    fn subdivide_covers_quadrants() {
        let poly = square();
        let parent = Cell::new(Point2::new(2.0, 2.0), 2.0, &poly);
        let children = parent.subdivide(&poly);
        let centers: Vec<_> = children.iter().map(|c| c.center).collect();
        assert_eq!(
            centers,
            vec![
                Point2::new(1.0, 1.0),
                Point2::new(3.0, 1.0),
                Point2::new(1.0, 3.0),
                Point2::new(3.0, 3.0),
            ]
        );
        assert!(children.iter().all(|c| (c.half_size - 1.0).abs() < 1e-12));
    }

    #[test]
    fn heap_pops_largest_bound_first() {
        let poly = square();
        let mut heap = BinaryHeap::new();
        for (seq, (x, h)) in [(1.0, 0.5), (2.0, 2.0), (3.0, 0.1)].into_iter().enumerate() {
            heap.push(QueuedCell {
                cell: Cell::new(Point2::new(x, 2.0), h, &poly),
                seq: seq as u64,
            });
        }
        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|q| q.cell.center.x)
            .collect();
        assert_eq!(order, vec![2.0, 1.0, 3.0]);
    }

    #[test]
    fn heap_ties_pop_in_insertion_order() {
        let poly = square();
        let mut heap = BinaryHeap::new();
        // Mirror-image cells share the same bound.
        for (seq, x) in [1.0, 3.0].into_iter().enumerate() {
            heap.push(QueuedCell {
                cell: Cell::new(Point2::new(x, 2.0), 0.5, &poly),
                seq: seq as u64,
            });
        }
        assert_eq!(heap.pop().unwrap().seq, 0);
        assert_eq!(heap.pop().unwrap().seq, 1);
    }
}
