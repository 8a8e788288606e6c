use crate::detection::Proximity;
use crate::policy::CollisionPolicy;
use common::shapes::Rectangle;
use quadtree::error::{validate_radius_scale, validate_universe_dims};
use quadtree::QuadtreeResult;

#[derive(Debug, Clone)]
pub struct Config {
    pub width: f64,
    pub height: f64,
    /// Radius given to blobs added by position only.
    pub default_radius: f64,
    pub proximity: Proximity,
    pub policy: CollisionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 800.0,
            height: 600.0,
            default_radius: 5.0,
            proximity: Proximity::default(),
            policy: CollisionPolicy::default(),
        }
    }
}

impl Config {
    pub fn universe(&self) -> Rectangle {
        Rectangle::from_size(self.width, self.height)
    }

    pub fn validate(&self) -> QuadtreeResult<()> {
        validate_universe_dims(self.width, self.height)?;
        if let Proximity::OwnRadiusScaled { scale } = self.proximity {
            validate_radius_scale(scale)?;
        }
        Ok(())
    }
}
