use super::*;

impl<E: Point2D> PointQuadtree<E> {
    /// Every stored point within `cr` of `(cx, cy)`, boundary included.
    ///
    /// Results come in pre-order: a node's anchor before its children, and
    /// children in quadrant order 1 to 4.
    pub fn find_in_circle(&self, cx: f64, cy: f64, cr: f64) -> Vec<&E> {
        let mut points = Vec::new();
        self.find_in_circle_from(0, cx, cy, cr, |point| points.push(point));
        points
    }

    /// Same traversal as [`find_in_circle`](Self::find_in_circle) without
    /// collecting into a `Vec`.
    pub fn find_in_circle_with<'a, F>(&'a self, cx: f64, cy: f64, cr: f64, f: F)
    where
        F: FnMut(&'a E),
    {
        self.find_in_circle_from(0, cx, cy, cr, f);
    }

    pub(crate) fn find_in_circle_from<'a, F>(
        &'a self,
        start: u32,
        cx: f64,
        cy: f64,
        cr: f64,
        mut f: F,
    ) where
        F: FnMut(&'a E),
    {
        let mut stack = NodeStack::new();
        stack.push(start);
        while let Some(index) = stack.pop() {
            let node = &self.nodes[index as usize];
            // Nothing below a node can be in range when its bounds are not.
            if !circle_intersects_rectangle(cx, cy, cr, &node.bounds) {
                continue;
            }
            if point_in_circle(node.point.x(), node.point.y(), cx, cy, cr) {
                f(&node.point);
            }
            for &child in node.children.iter().rev() {
                if child != NO_CHILD {
                    stack.push(child);
                }
            }
        }
    }

    /// Every stored point in pre-order.
    pub fn all_points(&self) -> Vec<&E> {
        let mut points = Vec::with_capacity(self.nodes.len());
        let mut stack = NodeStack::new();
        stack.push(0);
        while let Some(index) = stack.pop() {
            let node = &self.nodes[index as usize];
            points.push(&node.point);
            for &child in node.children.iter().rev() {
                if child != NO_CHILD {
                    stack.push(child);
                }
            }
        }
        points
    }

    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Rectangle>) {
        bounding_boxes.extend(self.nodes.iter().map(|node| node.bounds));
    }
}
