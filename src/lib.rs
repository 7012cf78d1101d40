//! Pole of inaccessibility search for polygons with holes.
//!
//! The pole is the interior point farthest from any edge, which is a good
//! anchor for placing a label inside a shape.
//!
//! ```
//! use polylabel::geometry::{Polygon, Ring};
//! use polylabel::operations::Polylabel;
//!
//! let square = Ring::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
//! let pole = Polylabel::new(0.1)
//!     .execute(&Polygon::from_exterior(square))
//!     .unwrap();
//! assert!((pole.point.x - 2.0).abs() <= 0.1);
//! assert!((pole.distance - 2.0).abs() <= 0.1);
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{PolylabelError, Result};
pub use geometry::{Polygon, Ring};
pub use math::Point2;
pub use operations::{polylabel, LabelParams, Pole, Polylabel};
