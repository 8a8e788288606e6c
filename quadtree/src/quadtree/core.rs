use super::*;

impl<E: Point2D> PointQuadtree<E> {
    /// Leaf tree anchored at `point`. The anchor itself is not checked
    /// against `bounds`.
    pub fn new(point: E, bounds: Rectangle) -> Self {
        Self::new_with_config(point, bounds, Config::default())
    }

    pub fn new_with_config(point: E, bounds: Rectangle, config: Config) -> Self {
        let mut nodes = Vec::with_capacity(config.pool_size.max(1));
        nodes.push(Node::new_leaf(point, bounds));
        Self { nodes }
    }

    /// Tree covering `(0, 0)` to `(width, height)`.
    pub fn with_universe(point: E, width: f64, height: f64) -> QuadtreeResult<Self> {
        validate_universe_dims(width, height)?;
        Ok(Self::new(point, Rectangle::from_size(width, height)))
    }

    /// Seeds the root with the first item and inserts the rest in order.
    /// Returns `None` for an empty input.
    pub fn build<I>(points: I, bounds: Rectangle) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (lower, _) = points.size_hint();
        let mut tree = Self::new_with_config(
            first,
            bounds,
            Config {
                pool_size: lower + 1,
            },
        );
        for point in points {
            tree.insert(point);
        }
        Some(tree)
    }

    /// Inserts `point` below the first node whose quadrant slot is free.
    ///
    /// A point outside the bounds of any node on its way down is dropped
    /// without a trace in the tree; it will not be counted or found later.
    pub fn insert(&mut self, point: E) {
        let px = point.x();
        let py = point.y();
        let mut index = 0usize;
        loop {
            let node = &self.nodes[index];
            if !node.bounds.contains_point(px, py) {
                log::trace!(
                    "dropping point ({}, {}) outside node bounds {:?}",
                    px,
                    py,
                    node.bounds
                );
                return;
            }

            let anchor_x = node.point.x();
            let anchor_y = node.point.y();
            let Some(quadrant) = Quadrant::classify(anchor_x, anchor_y, px, py) else {
                log::trace!("dropping unclassifiable point ({}, {})", px, py);
                return;
            };

            match node.child(quadrant) {
                Some(child) => index = child as usize,
                None => {
                    let bounds = quadrant.clip(&node.bounds, anchor_x, anchor_y);
                    let child = self.nodes.len() as u32;
                    self.nodes.push(Node::new_leaf(point, bounds));
                    self.nodes[index].children[quadrant.slot()] = child;
                    return;
                }
            }
        }
    }

    /// Number of stored points. Walks the whole tree on every call.
    pub fn size(&self) -> usize {
        self.root().size()
    }

    /// Nodes on the longest root-to-leaf path; a lone root has depth 1.
    pub fn depth(&self) -> usize {
        let mut stack: SmallVec<[(u32, usize); 64]> = SmallVec::new();
        stack.push((0, 1));
        let mut deepest = 0;
        while let Some((index, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            for &child in &self.nodes[index as usize].children {
                if child != NO_CHILD {
                    stack.push((child, depth + 1));
                }
            }
        }
        deepest
    }

    pub fn bounds(&self) -> Rectangle {
        self.nodes[0].bounds
    }
}
