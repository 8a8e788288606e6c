use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::Rectangle;
use smallvec::SmallVec;

pub(crate) const NO_CHILD: u32 = 0;

pub(crate) type NodeStack = SmallVec<[u32; 64]>;

/// One of the four regions a node splits its bounds into, relative to its
/// anchor. Numbered 1 to 4; y grows downwards, so the first quadrant is the
/// upper right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    First,
    Second,
    Third,
    Fourth,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::First,
        Quadrant::Second,
        Quadrant::Third,
        Quadrant::Fourth,
    ];

    pub fn number(self) -> u8 {
        self.slot() as u8 + 1
    }

    #[inline(always)]
    pub(crate) fn slot(self) -> usize {
        match self {
            Quadrant::First => 0,
            Quadrant::Second => 1,
            Quadrant::Third => 2,
            Quadrant::Fourth => 3,
        }
    }

    /// Quadrant of `(x, y)` relative to the anchor. The four tests overlap on
    /// the anchor's axes and are evaluated in order 1, 2, 3, 4, so an aligned
    /// point always lands in the lowest numbered match. Returns `None` only
    /// when no test holds (NaN coordinates).
    #[inline(always)]
    pub fn classify(anchor_x: f64, anchor_y: f64, x: f64, y: f64) -> Option<Quadrant> {
        if x >= anchor_x && y <= anchor_y {
            Some(Quadrant::First)
        } else if x <= anchor_x && y <= anchor_y {
            Some(Quadrant::Second)
        } else if x <= anchor_x && y >= anchor_y {
            Some(Quadrant::Third)
        } else if x >= anchor_x && y >= anchor_y {
            Some(Quadrant::Fourth)
        } else {
            None
        }
    }

    /// Bounds of this quadrant's child: the parent bounds cut at the anchor.
    #[inline(always)]
    pub fn clip(self, bounds: &Rectangle, anchor_x: f64, anchor_y: f64) -> Rectangle {
        match self {
            Quadrant::First => Rectangle::new(anchor_x, bounds.y1, bounds.x2, anchor_y),
            Quadrant::Second => Rectangle::new(bounds.x1, bounds.y1, anchor_x, anchor_y),
            Quadrant::Third => Rectangle::new(bounds.x1, anchor_y, anchor_x, bounds.y2),
            Quadrant::Fourth => Rectangle::new(anchor_x, anchor_y, bounds.x2, bounds.y2),
        }
    }
}

impl TryFrom<u8> for Quadrant {
    type Error = QuadtreeError;

    fn try_from(quadrant: u8) -> QuadtreeResult<Self> {
        match quadrant {
            1 => Ok(Quadrant::First),
            2 => Ok(Quadrant::Second),
            3 => Ok(Quadrant::Third),
            4 => Ok(Quadrant::Fourth),
            _ => Err(QuadtreeError::InvalidQuadrant { quadrant }),
        }
    }
}

pub(crate) struct Node<E> {
    pub(crate) point: E,
    pub(crate) bounds: Rectangle,
    pub(crate) children: [u32; 4],
}

impl<E> Node<E> {
    #[inline(always)]
    pub(crate) fn new_leaf(point: E, bounds: Rectangle) -> Self {
        Self {
            point,
            bounds,
            children: [NO_CHILD; 4],
        }
    }

    #[inline(always)]
    pub(crate) fn child(&self, quadrant: Quadrant) -> Option<u32> {
        match self.children[quadrant.slot()] {
            NO_CHILD => None,
            child => Some(child),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_off_axis() {
        assert_eq!(Quadrant::classify(5.0, 5.0, 8.0, 2.0), Some(Quadrant::First));
        assert_eq!(Quadrant::classify(5.0, 5.0, 2.0, 2.0), Some(Quadrant::Second));
        assert_eq!(Quadrant::classify(5.0, 5.0, 2.0, 8.0), Some(Quadrant::Third));
        assert_eq!(Quadrant::classify(5.0, 5.0, 8.0, 8.0), Some(Quadrant::Fourth));
    }

    #[test]
    fn classify_ties_pick_lowest_quadrant() {
        // Same point as the anchor matches all four tests.
        assert_eq!(Quadrant::classify(5.0, 5.0, 5.0, 5.0), Some(Quadrant::First));
        // On the vertical axis, above: 1 and 2 match.
        assert_eq!(Quadrant::classify(5.0, 5.0, 5.0, 2.0), Some(Quadrant::First));
        // On the vertical axis, below: 3 and 4 match.
        assert_eq!(Quadrant::classify(5.0, 5.0, 5.0, 8.0), Some(Quadrant::Third));
        // On the horizontal axis, left: 2 and 3 match.
        assert_eq!(Quadrant::classify(5.0, 5.0, 2.0, 5.0), Some(Quadrant::Second));
        // On the horizontal axis, right: 1 and 4 match.
        assert_eq!(Quadrant::classify(5.0, 5.0, 8.0, 5.0), Some(Quadrant::First));
    }

    #[test]
    fn classify_nan_matches_nothing() {
        assert_eq!(Quadrant::classify(5.0, 5.0, f64::NAN, 2.0), None);
        assert_eq!(Quadrant::classify(5.0, 5.0, 2.0, f64::NAN), None);
    }

    #[test]
    fn clip_cuts_at_anchor() {
        let bounds = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            Quadrant::First.clip(&bounds, 3.0, 7.0),
            Rectangle::new(3.0, 0.0, 10.0, 7.0)
        );
        assert_eq!(
            Quadrant::Second.clip(&bounds, 3.0, 7.0),
            Rectangle::new(0.0, 0.0, 3.0, 7.0)
        );
        assert_eq!(
            Quadrant::Third.clip(&bounds, 3.0, 7.0),
            Rectangle::new(0.0, 7.0, 3.0, 10.0)
        );
        assert_eq!(
            Quadrant::Fourth.clip(&bounds, 3.0, 7.0),
            Rectangle::new(3.0, 7.0, 10.0, 10.0)
        );
    }

    #[test]
    fn quadrant_numbers_round_trip() {
        for quadrant in Quadrant::ALL {
            assert_eq!(Quadrant::try_from(quadrant.number()), Ok(quadrant));
        }
        assert_eq!(
            Quadrant::try_from(0),
            Err(QuadtreeError::InvalidQuadrant { quadrant: 0 })
        );
        assert!(Quadrant::try_from(5).is_err());
    }
}
