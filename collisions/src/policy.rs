use crate::detection::Colliders;
use fxhash::FxHashSet;

/// What the caller does with the colliders of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Leave every entity in place and highlight the colliders.
    #[default]
    Mark,
    /// Drop every collider from the live entity list.
    Remove,
}

/// Removes every entity whose index appears anywhere in `colliders` and
/// returns how many were removed. Must run against the same list, in the
/// same order, that the colliders were detected on.
pub fn remove_colliders<E>(entities: &mut Vec<E>, colliders: &Colliders) -> usize {
    if colliders.is_empty() {
        return 0;
    }
    let doomed: FxHashSet<usize> = colliders.entries().iter().copied().collect();
    let before = entities.len();
    let mut index = 0;
    entities.retain(|_| {
        let keep = !doomed.contains(&index);
        index += 1;
        keep
    });
    before - entities.len()
}

/// Each colliding entity once, in list order.
pub fn marked<'a, E>(entities: &'a [E], colliders: &Colliders) -> Vec<&'a E> {
    colliders
        .distinct()
        .into_iter()
        .filter_map(|index| entities.get(index))
        .collect()
}
