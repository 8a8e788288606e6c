use super::*;

/// Borrowed view of one node and the subtree below it.
pub struct NodeRef<'a, E> {
    tree: &'a PointQuadtree<E>,
    index: u32,
}

impl<E> Clone for NodeRef<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for NodeRef<'_, E> {}

impl<'a, E: Point2D> NodeRef<'a, E> {
    #[inline(always)]
    fn node(&self) -> &'a Node<E> {
        &self.tree.nodes[self.index as usize]
    }

    /// The anchor point stored at this node.
    pub fn point(&self) -> &'a E {
        &self.node().point
    }

    pub fn bounds(&self) -> Rectangle {
        self.node().bounds
    }

    pub fn child(&self, quadrant: Quadrant) -> Option<NodeRef<'a, E>> {
        self.node().child(quadrant).map(|index| NodeRef {
            tree: self.tree,
            index,
        })
    }

    /// Child in quadrant 1 to 4; any other number has no child.
    pub fn get_child(&self, quadrant: u8) -> Option<NodeRef<'a, E>> {
        let quadrant = Quadrant::try_from(quadrant).ok()?;
        self.child(quadrant)
    }

    pub fn has_child(&self, quadrant: u8) -> bool {
        self.get_child(quadrant).is_some()
    }

    pub fn is_leaf(&self) -> bool {
        self.node().children.iter().all(|&child| child == NO_CHILD)
    }

    /// Present children in quadrant order.
    pub fn children(&self) -> impl Iterator<Item = (Quadrant, NodeRef<'a, E>)> + 'a
    where
        E: 'a,
    {
        let this = *self;
        Quadrant::ALL
            .into_iter()
            .filter_map(move |quadrant| this.child(quadrant).map(|child| (quadrant, child)))
    }

    /// Points stored in this subtree, counted on every call.
    pub fn size(&self) -> usize {
        let mut stack = NodeStack::new();
        stack.push(self.index);
        let mut count = 0;
        while let Some(index) = stack.pop() {
            count += 1;
            for &child in &self.tree.nodes[index as usize].children {
                if child != NO_CHILD {
                    stack.push(child);
                }
            }
        }
        count
    }

    pub fn find_in_circle(&self, cx: f64, cy: f64, cr: f64) -> Vec<&'a E> {
        let mut points = Vec::new();
        self.tree
            .find_in_circle_from(self.index, cx, cy, cr, |point| points.push(point));
        points
    }
}

impl<E: Point2D> PointQuadtree<E> {
    pub fn root(&self) -> NodeRef<'_, E> {
        NodeRef {
            tree: self,
            index: 0,
        }
    }

    pub fn get_child(&self, quadrant: u8) -> Option<NodeRef<'_, E>> {
        self.root().get_child(quadrant)
    }

    pub fn has_child(&self, quadrant: u8) -> bool {
        self.root().has_child(quadrant)
    }
}
