pub mod point;
pub mod shapes;

pub use point::{Collider, Point2D};
