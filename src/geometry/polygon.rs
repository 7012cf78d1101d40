use crate::error::{GeometryError, Result};
use crate::geometry::{Aabb2, Ring};
use crate::math::distance_2d::point_to_rings_distance;
use crate::math::Point2;

/// A polygon made of one exterior ring and any number of holes.
///
/// Holes are expected to lie inside the exterior; this is not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    exterior: Ring,
    holes: Vec<Ring>,
}

impl Polygon {
    #[must_use]
    pub fn new(exterior: Ring, holes: Vec<Ring>) -> Self {
        Self { exterior, holes }
    }

    /// Creates a polygon without holes.
    #[must_use]
    pub fn from_exterior(exterior: Ring) -> Self {
        Self::new(exterior, Vec::new())
    }

    #[must_use]
    pub fn exterior(&self) -> &Ring {
        &self.exterior
    }

    #[must_use]
    pub fn holes(&self) -> &[Ring] {
        &self.holes
    }

    /// Iterates over all rings, exterior first.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        std::iter::once(&self.exterior).chain(self.holes.iter())
    }

    /// Bounding box of the exterior ring.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Aabb2> {
        self.exterior.bounding_box()
    }

    /// Signed distance from `p` to the nearest edge of any ring.
    ///
    /// Positive inside the polygon, negative outside or inside a hole.
    #[must_use]
    pub fn signed_distance(&self, p: &Point2) -> f64 {
        point_to_rings_distance(p, self.rings().map(Ring::points))
    }

    /// Checks the preconditions the labelling search relies on.
    ///
    /// Every ring must have at least one edge and only finite coordinates.
    /// Zero-area and self-touching rings are accepted.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptyRing` or
    /// `GeometryError::NonFiniteCoordinate` naming the offending ring
    /// (`0` for the exterior, `1..` for holes).
    pub fn validate(&self) -> Result<()> {
        for (ring_idx, ring) in self.rings().enumerate() {
            if ring.edge_count() == 0 {
                return Err(GeometryError::EmptyRing { ring: ring_idx }.into());
            }
            if let Some(index) = ring
                .points()
                .iter()
                .position(|p| !p.x.is_finite() || !p.y.is_finite())
            {
                return Err(GeometryError::NonFiniteCoordinate {
                    ring: ring_idx,
                    index,
                }
                .into());
            }
        }
        Ok(())
    }
}

impl From<Ring> for Polygon {
    fn from(exterior: Ring) -> Self {
        Self::from_exterior(exterior)
    }
}
