use crate::config::Config;
use crate::detection::{detect_collisions_with, Colliders};
use crate::policy::{marked, remove_colliders, CollisionPolicy};
use common::shapes::Circle;
use quadtree::QuadtreeResult;
use rand::Rng;

/// Live blobs in a fixed universe plus the colliders of the latest tick.
///
/// Motion is left to the caller through [`World::blobs_mut`]; a tick only
/// detects collisions and applies the configured policy.
pub struct World {
    config: Config,
    blobs: Vec<Circle>,
    colliders: Colliders,
}

impl World {
    pub fn new(config: Config) -> QuadtreeResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            blobs: Vec::new(),
            colliders: Colliders::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Adds a blob with the default radius.
    pub fn add(&mut self, x: f64, y: f64) {
        self.blobs.push(Circle::new(x, y, self.config.default_radius));
    }

    pub fn add_circle(&mut self, circle: Circle) {
        self.blobs.push(circle);
    }

    /// Adds `count` blobs at random positions inside the universe.
    pub fn spawn_random<R: Rng>(&mut self, count: usize, rng: &mut R) {
        let universe = self.config.universe();
        for _ in 0..count {
            let (x, y) = universe.get_random_point_inside(0.0, rng);
            self.add(x, y);
        }
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.config.policy
    }

    pub fn set_policy(&mut self, policy: CollisionPolicy) {
        if policy != self.config.policy {
            log::info!("collision policy: {:?}", policy);
        }
        self.config.policy = policy;
    }

    /// Runs one detection cycle over the current blobs.
    pub fn tick(&mut self) {
        self.colliders.clear();
        if self.blobs.is_empty() {
            return;
        }

        self.colliders =
            detect_collisions_with(&self.blobs, &self.config.universe(), self.config.proximity);
        if self.config.policy == CollisionPolicy::Remove {
            let removed = remove_colliders(&mut self.blobs, &self.colliders);
            if removed > 0 {
                log::info!("removed {} colliding blobs, {} left", removed, self.blobs.len());
            }
            self.colliders.clear();
        }
    }

    pub fn blobs(&self) -> &[Circle] {
        &self.blobs
    }

    /// Blobs can move but not be added or removed here, so collider indices
    /// stay valid until the next tick.
    pub fn blobs_mut(&mut self) -> &mut [Circle] {
        &mut self.blobs
    }

    pub fn colliders(&self) -> &Colliders {
        &self.colliders
    }

    /// Blobs that collided during the last tick, each once.
    pub fn highlighted(&self) -> Vec<&Circle> {
        marked(&self.blobs, &self.colliders)
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}
