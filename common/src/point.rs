use nalgebra::Point2;

/// Anything with a 2D position can be stored in a point quadtree.
pub trait Point2D {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

/// A positioned entity that also has a collision radius.
///
/// Only the collision layer needs this; the quadtree itself is satisfied by
/// [`Point2D`].
pub trait Collider: Point2D {
    fn radius(&self) -> f64;
}

impl Point2D for Point2<f64> {
    #[inline(always)]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline(always)]
    fn y(&self) -> f64 {
        self.y
    }
}

impl Point2D for (f64, f64) {
    #[inline(always)]
    fn x(&self) -> f64 {
        self.0
    }

    #[inline(always)]
    fn y(&self) -> f64 {
        self.1
    }
}

impl<T: Point2D + ?Sized> Point2D for &T {
    #[inline(always)]
    fn x(&self) -> f64 {
        (**self).x()
    }

    #[inline(always)]
    fn y(&self) -> f64 {
        (**self).y()
    }
}

impl<T: Collider + ?Sized> Collider for &T {
    #[inline(always)]
    fn radius(&self) -> f64 {
        (**self).radius()
    }
}
