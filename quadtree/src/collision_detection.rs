use common::shapes::{Circle, Rectangle};

/// True when the closed disk at `(cx, cy)` with radius `cr` shares at least
/// one point with the closed rectangle. A negative radius touches nothing.
#[inline(always)]
pub fn circle_intersects_rectangle(cx: f64, cy: f64, cr: f64, rect: &Rectangle) -> bool {
    if cr < 0.0 {
        return false;
    }
    rect.distance_sq_to_point(cx, cy) <= cr * cr
}

/// Boundary inclusive: a point exactly `cr` away is inside.
#[inline(always)]
pub fn point_in_circle(px: f64, py: f64, cx: f64, cy: f64, cr: f64) -> bool {
    if cr < 0.0 {
        return false;
    }
    let dx = px - cx;
    let dy = py - cy;
    dx * dx + dy * dy <= cr * cr
}

pub fn circle_rectangle(circle: &Circle, rectangle: &Rectangle) -> bool {
    circle_intersects_rectangle(circle.x, circle.y, circle.radius, rectangle)
}

pub fn circle_contains_point(circle: &Circle, x: f64, y: f64) -> bool {
    point_in_circle(x, y, circle.x, circle.y, circle.radius)
}
