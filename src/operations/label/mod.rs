mod cell;

pub use cell::Cell;

use std::collections::BinaryHeap;

use cell::QueuedCell;
use tracing::{debug, debug_span, trace, warn};

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::Polygon;
use crate::math::polygon_2d::ring_centroid;
use crate::math::Point2;

/// Parameters controlling the pole search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelParams {
    /// The returned distance is within `precision` of the optimum.
    pub precision: f64,
    /// Stop after popping this many cells and return the best one so far.
    ///
    /// `None` runs the search to convergence.
    pub max_cells: Option<usize>,
}

impl Default for LabelParams {
    fn default() -> Self {
        Self {
            precision: 1.0,
            max_cells: None,
        }
    }
}

/// The result of a pole search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pole {
    /// The interior point farthest from the boundary.
    pub point: Point2,
    /// Signed distance from `point` to the boundary.
    pub distance: f64,
}

impl From<Cell> for Pole {
    fn from(cell: Cell) -> Self {
        Self {
            point: cell.center,
            distance: cell.distance,
        }
    }
}

/// Finds the pole of inaccessibility of a polygon: the interior point whose
/// distance to the nearest edge is largest.
///
/// Runs a best-first branch and bound over square cells tiling the bounding
/// box. Cells are popped by their optimistic bound `distance + h * sqrt(2)`
/// and only subdivided while that bound beats the best distance found so far
/// by more than the precision.
#[derive(Debug, Clone)]
pub struct Polylabel {
    params: LabelParams,
}

impl Polylabel {
    /// Creates a search with the given precision and no cell cap.
    #[must_use]
    pub fn new(precision: f64) -> Self {
        Self {
            params: LabelParams {
                precision,
                ..LabelParams::default()
            },
        }
    }

    /// Replaces all search parameters.
    #[must_use]
    pub fn with_params(mut self, params: LabelParams) -> Self {
        self.params = params;
        self
    }

    /// Caps the number of cells popped from the queue.
    #[must_use]
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.params.max_cells = Some(max_cells);
        self
    }

    #[must_use]
    pub fn params(&self) -> &LabelParams {
        &self.params
    }

    /// Runs the search on `polygon`.
    ///
    /// Polygons whose bounding box has zero width or height return the
    /// box's minimum corner with distance `0`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidPrecision` if the precision is not a
    /// positive finite number, `OperationError::InvalidParameters` for a zero
    /// cell cap, and a `GeometryError` if the polygon fails
    /// [`Polygon::validate`].
    pub fn execute(&self, polygon: &Polygon) -> Result<Pole> {
        let LabelParams {
            precision,
            max_cells,
        } = self.params;
        if !precision.is_finite() || precision <= 0.0 {
            return Err(OperationError::InvalidPrecision(precision).into());
        }
        if max_cells == Some(0) {
            return Err(
                OperationError::InvalidParameters("max_cells must be at least 1".into()).into(),
            );
        }
        polygon.validate()?;

        let _span = debug_span!("polylabel", precision).entered();

        let bbox = polygon
            .bounding_box()
            .ok_or(GeometryError::EmptyRing { ring: 0 })?;
        let width = bbox.width();
        let height = bbox.height();
        let cell_size = width.min(height);

        #[allow(clippy::float_cmp)]
        let degenerate = cell_size == 0.0;
        if degenerate {
            debug!(width, height, "zero-extent bounding box");
            return Ok(Pole {
                point: bbox.min,
                distance: 0.0,
            });
        }
        let h = cell_size / 2.0;

        let mut queue = BinaryHeap::new();
        let mut seq = 0u64;
        let mut push = |queue: &mut BinaryHeap<QueuedCell>, cell: Cell| {
            queue.push(QueuedCell { cell, seq });
            seq += 1;
        };

        let mut x = bbox.min.x;
        while x < bbox.max.x {
            let mut y = bbox.min.y;
            while y < bbox.max.y {
                push(&mut queue, Cell::new(Point2::new(x + h, y + h), h, polygon));
                y += cell_size;
            }
            x += cell_size;
        }
        let seeded = queue.len();

        let centroid = ring_centroid(polygon.exterior().points())
            .ok_or(GeometryError::EmptyRing { ring: 0 })?;
        let mut best = Cell::new(centroid, 0.0, polygon);

        // Special case for rectangles and shapes whose centroid is a poor seed.
        let bbox_cell = Cell::new(bbox.center(), 0.0, polygon);
        if bbox_cell.distance > best.distance {
            best = bbox_cell;
        }

        let mut popped = 0usize;
        while let Some(QueuedCell { cell, .. }) = queue.pop() {
            if let Some(limit) = max_cells {
                if popped >= limit {
                    warn!(
                        limit,
                        remaining = queue.len() + 1,
                        "cell cap reached before convergence"
                    );
                    break;
                }
            }
            popped += 1;

            if cell.distance > best.distance {
                trace!(
                    x = cell.center.x,
                    y = cell.center.y,
                    distance = cell.distance,
                    "new best cell"
                );
                best = cell;
            }

            if cell.max_distance - best.distance <= precision {
                continue;
            }

            for child in cell.subdivide(polygon) {
                push(&mut queue, child);
            }
        }

        debug!(
            seeded,
            popped,
            created = seq,
            x = best.center.x,
            y = best.center.y,
            distance = best.distance,
            "search finished"
        );
        Ok(best.into())
    }
}

/// Returns the pole of inaccessibility of `polygon` within `precision`.
///
/// # Errors
///
/// See [`Polylabel::execute`].
pub fn polylabel(polygon: &Polygon, precision: f64) -> Result<Point2> {
    Polylabel::new(precision)
        .execute(polygon)
        .map(|pole| pole.point)
}
