use crate::point::{Collider, Point2D};
use rand::Rng;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Circle {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn update(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn update_with_radius(&mut self, x: f64, y: f64, radius: f64) {
        self.x = x;
        self.y = y;
        self.radius = radius;
    }

    pub fn bounding_box(&self) -> Rectangle {
        Rectangle {
            x1: self.x - self.radius,
            y1: self.y - self.radius,
            x2: self.x + self.radius,
            y2: self.y + self.radius,
        }
    }
}

impl Point2D for Circle {
    #[inline(always)]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline(always)]
    fn y(&self) -> f64 {
        self.y
    }
}

impl Collider for Circle {
    #[inline(always)]
    fn radius(&self) -> f64 {
        self.radius
    }
}

/// Axis-aligned rectangle stored by its corners. Both edges are part of the
/// rectangle; `x1 <= x2` and `y1 <= y2` are expected but not enforced.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rectangle {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rectangle {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Rectangle anchored at the origin, the shape of a universe.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    pub fn center_x(&self) -> f64 {
        (self.x1 + self.x2) * 0.5
    }

    pub fn center_y(&self) -> f64 {
        (self.y1 + self.y2) * 0.5
    }

    pub fn top_left(&self) -> (f64, f64) {
        (self.x1, self.y1)
    }

    pub fn bottom_right(&self) -> (f64, f64) {
        (self.x2, self.y2)
    }

    /// Squared distance from `(x, y)` to the closest point of the rectangle.
    pub fn distance_sq_to_point(&self, x: f64, y: f64) -> f64 {
        let dx = if x < self.x1 {
            self.x1 - x
        } else if x > self.x2 {
            x - self.x2
        } else {
            0.0
        };
        let dy = if y < self.y1 {
            self.y1 - y
        } else if y > self.y2 {
            y - self.y2
        } else {
            0.0
        };
        dx * dx + dy * dy
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    pub fn contains_rectangle(&self, other: &Rectangle) -> bool {
        self.x1 <= other.x1 && self.x2 >= other.x2 && self.y1 <= other.y1 && self.y2 >= other.y2
    }

    pub fn get_random_point_inside<R: Rng>(&self, margin: f64, rng: &mut R) -> (f64, f64) {
        (
            safe_rand(rng, self.x1 + margin, self.x2 - margin),
            safe_rand(rng, self.y1 + margin, self.y2 - margin),
        )
    }
}

fn safe_rand<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..=max)
}
