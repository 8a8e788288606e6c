//! Point quadtree: every node stores exactly one anchor point and splits its
//! bounds at that anchor, so the shape of the tree follows insertion order.
//!
//! Nodes live in a flat arena and refer to their children by index. Index 0
//! is always the root, which lets `0` double as the empty child slot.

use crate::collision_detection::{circle_intersects_rectangle, point_in_circle};
use crate::error::{validate_universe_dims, QuadtreeResult};
use common::shapes::Rectangle;
use common::Point2D;
use smallvec::SmallVec;

mod api;
mod config;
mod core;
mod query_circle;
mod types;

pub use api::NodeRef;
pub use config::Config;
pub use types::Quadrant;

pub(crate) use types::{Node, NodeStack, NO_CHILD};

pub struct PointQuadtree<E> {
    nodes: Vec<Node<E>>,
}
