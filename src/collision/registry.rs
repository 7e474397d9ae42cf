use specs::{Entities, Entity};
use std::collections::{hash_set, HashSet};

/// The partners a rigid body currently overlaps with.
///
/// Partners are stored as generational `Entity` handles, so a partner that
/// has since been deleted can be told apart from a live one instead of
/// dangling. Nothing here removes this body from the partners' registries;
/// that is the job of the pairwise test and of `ecs::remove_body`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionRegistry {
    partners: HashSet<Entity>,
}

impl CollisionRegistry {
    pub fn new() -> CollisionRegistry {
        CollisionRegistry::default()
    }

    /// Returns `false` if `partner` was already registered.
    pub fn add(&mut self, partner: Entity) -> bool {
        self.partners.insert(partner)
    }

    /// Returns `false` if `partner` was not registered.
    pub fn remove(&mut self, partner: Entity) -> bool {
        self.partners.remove(&partner)
    }

    pub fn clear(&mut self) {
        self.partners.clear();
    }

    pub fn contains(&self, partner: Entity) -> bool {
        self.partners.contains(&partner)
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }

    pub fn len(&self) -> usize {
        self.partners.len()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Entity> {
        self.partners.iter()
    }

    /// Drops partners that are no longer alive. Returns how many were dropped.
    pub fn prune_dead(&mut self, entities: &Entities) -> usize {
        let before = self.partners.len();
        self.partners.retain(|e| entities.is_alive(*e));
        before - self.partners.len()
    }
}

impl<'a> IntoIterator for &'a CollisionRegistry {
    type Item = &'a Entity;
    type IntoIter = hash_set::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specs::{Builder, World};

    #[test]
    fn test_add_remove_idempotent() {
        let mut world = World::new();
        let a = world.create_entity().build();
        let b = world.create_entity().build();

        let mut registry = CollisionRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.add(a));
        assert!(!registry.add(a));
        assert!(registry.add(b));
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(a));

        assert!(registry.remove(a));
        assert!(!registry.remove(a));
        assert!(!registry.contains(a));
        assert_eq!(registry.len(), 1);

        registry.clear();
        assert!(registry.is_empty());
        // Removing from an empty registry is fine.
        assert!(!registry.remove(b));
    }

    #[test]
    fn test_prune_dead() {
        let mut world = World::new();
        let a = world.create_entity().build();
        let b = world.create_entity().build();
        let c = world.create_entity().build();

        let mut registry = CollisionRegistry::new();
        registry.add(a);
        registry.add(b);
        registry.add(c);

        world.delete_entity(b).unwrap();
        world.maintain();
        // A new entity may reuse b's slot, but not its generation.
        let d = world.create_entity().build();

        assert_eq!(registry.prune_dead(&world.entities()), 1);
        assert!(registry.contains(a));
        assert!(!registry.contains(b));
        assert!(registry.contains(c));
        assert!(!registry.contains(d));
        assert_eq!(registry.prune_dead(&world.entities()), 0);
    }

    #[test]
    fn test_iter() {
        let mut world = World::new();
        let a = world.create_entity().build();
        let b = world.create_entity().build();

        let mut registry = CollisionRegistry::new();
        registry.add(a);
        registry.add(b);
        let mut partners: Vec<Entity> = registry.iter().cloned().collect();
        partners.sort();
        assert_eq!(partners, vec![a, b]);
        assert_eq!((&registry).into_iter().count(), 2);
    }
}
