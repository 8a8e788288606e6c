use common::shapes::Rectangle;
use common::{Collider, Point2D};
use quadtree::collision_detection::point_in_circle;
use quadtree::PointQuadtree;

pub const DEFAULT_RADIUS_SCALE: f64 = 2.0;

/// How close two entities have to be to count as colliding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Proximity {
    /// Each entity searches `scale` times its own radius. The other entity's
    /// radius plays no part, so a large entity can see a small one that does
    /// not see it back.
    OwnRadiusScaled { scale: f64 },
    /// Symmetric contact test: centers no further apart than the sum of the
    /// two radii.
    SumOfRadii,
}

impl Default for Proximity {
    fn default() -> Self {
        Proximity::OwnRadiusScaled {
            scale: DEFAULT_RADIUS_SCALE,
        }
    }
}

/// Entities found near another entity during one cycle, by index into the
/// slice that was checked.
///
/// Every hit appends the querying entity and then the entity it found, so a
/// colliding pair seen from both sides contributes four entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Colliders {
    entries: Vec<usize>,
}

impl Colliders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[usize] {
        &self.entries
    }

    /// `(querier, found)` in the order the hits were made.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.entries.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains(&index)
    }

    /// Sorted indices with duplicates removed.
    pub fn distinct(&self) -> Vec<usize> {
        let mut indices = self.entries.clone();
        indices.sort_unstable();
        indices.dedup();
        indices
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline(always)]
    fn push_pair(&mut self, querier: usize, found: usize) {
        self.entries.push(querier);
        self.entries.push(found);
    }
}

struct Indexed<'a, E> {
    index: usize,
    entity: &'a E,
}

impl<E: Point2D> Point2D for Indexed<'_, E> {
    #[inline(always)]
    fn x(&self) -> f64 {
        self.entity.x()
    }

    #[inline(always)]
    fn y(&self) -> f64 {
        self.entity.y()
    }
}

/// One detection cycle with the default proximity test (own radius doubled).
pub fn detect_collisions<E: Collider>(entities: &[E], universe: &Rectangle) -> Colliders {
    detect_collisions_with(entities, universe, Proximity::default())
}

/// Builds a fresh tree over `entities` (the first one is the root), then asks
/// it for the neighbourhood of every entity.
///
/// Entities outside `universe` never make it into the tree, so nobody finds
/// them, but they still run their own query.
pub fn detect_collisions_with<E: Collider>(
    entities: &[E],
    universe: &Rectangle,
    proximity: Proximity,
) -> Colliders {
    let mut colliders = Colliders::new();
    let indexed = entities
        .iter()
        .enumerate()
        .map(|(index, entity)| Indexed { index, entity });
    let Some(tree) = PointQuadtree::build(indexed, *universe) else {
        return colliders;
    };

    match proximity {
        Proximity::OwnRadiusScaled { scale } => {
            for (index, entity) in entities.iter().enumerate() {
                tree.find_in_circle_with(
                    entity.x(),
                    entity.y(),
                    entity.radius() * scale,
                    |other| {
                        if other.index != index {
                            colliders.push_pair(index, other.index);
                        }
                    },
                );
            }
        }
        Proximity::SumOfRadii => {
            let max_radius = entities
                .iter()
                .map(|entity| entity.radius())
                .fold(f64::NEG_INFINITY, f64::max);
            for (index, entity) in entities.iter().enumerate() {
                let (x, y, radius) = (entity.x(), entity.y(), entity.radius());
                tree.find_in_circle_with(x, y, radius + max_radius, |other| {
                    let reach = radius + other.entity.radius();
                    if other.index != index && point_in_circle(other.x(), other.y(), x, y, reach) {
                        colliders.push_pair(index, other.index);
                    }
                });
            }
        }
    }

    log::debug!(
        "collision cycle: {} entities, {} in tree (depth {}), {} collider entries",
        entities.len(),
        tree.size(),
        tree.depth(),
        colliders.len()
    );
    colliders
}
