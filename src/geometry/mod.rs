pub mod aabb;
pub mod polygon;
pub mod ring;

pub use aabb::Aabb2;
pub use polygon::Polygon;
pub use ring::Ring;
