pub mod components;
pub mod entity;
pub mod systems;

pub use self::{
    components::{CollisionStats, RigidBodyComponent},
    entity::Entity,
    systems::{CollisionSystem, DebugDrawSystem},
};

use crate::collision::{CollisionError, CollisionResult};
use log::{debug, trace};
use specs::{prelude::*, storage::MaskedStorage, Storage};
use std::ops::DerefMut;

/// Registers the rigid body storage and the collision resources.
pub fn register(world: &mut World) {
    world.register::<RigidBodyComponent>();
    world.add_resource(CollisionStats::default());
}

/// Tests the bodies of `a` and `b` against each other and updates both
/// registries. Fails with `MissingBody` if either handle has no rigid body,
/// in which case neither registry is touched.
pub fn test_collision<D>(
    storage: &mut Storage<RigidBodyComponent, D>,
    a: specs::Entity,
    b: specs::Entity,
) -> CollisionResult<bool>
where
    D: DerefMut<Target = MaskedStorage<RigidBodyComponent>>,
{
    let colliding = {
        let body_a = &storage.get(a).ok_or(CollisionError::MissingBody(a))?.0;
        let body_b = &storage.get(b).ok_or(CollisionError::MissingBody(b))?.0;
        body_a.overlaps(body_b)
    };
    storage
        .get_mut(a)
        .ok_or(CollisionError::MissingBody(a))?
        .0
        .record_collision(b, colliding);
    storage
        .get_mut(b)
        .ok_or(CollisionError::MissingBody(b))?
        .0
        .record_collision(a, colliding);
    trace!("{:?} x {:?}: colliding {}", a, b, colliding);
    Ok(colliding)
}

/// Removes `entity` from every registry that lists it, then deletes it.
pub fn remove_body(world: &mut World, entity: specs::Entity) -> CollisionResult<()> {
    {
        let mut bodies = world.write_storage::<RigidBodyComponent>();
        if bodies.get(entity).is_none() {
            return Err(CollisionError::MissingBody(entity));
        }
        let mut unlinked = 0;
        for body in (&mut bodies).join() {
            if body.0.colliding_mut().remove(entity) {
                unlinked += 1;
            }
        }
        debug!("removing {:?}, unlinked from {} partners", entity, unlinked);
    }
    world.delete_entity(entity)?;
    world.maintain();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::prelude::*;

    fn setup() -> World {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut world = World::new();
        register(&mut world);
        world
    }

    fn cube_at(world: &World, x: f32, y: f32, z: f32) -> specs::Entity {
        Entity::new_rigid_body_with_transform_w(
            &[Point3f::new(-1.0, -1.0, -1.0), Point3f::new(1.0, 1.0, 1.0)],
            Transform3f::new_with_translation(Vector3f::new(x, y, z)),
            world,
        )
        .entity
    }

    #[test]
    fn test_collision_updates_both_registries() {
        let world = setup();
        let a = cube_at(&world, 0.0, 0.0, 0.0);
        let b = cube_at(&world, 1.9, 0.0, 0.0);
        let c = cube_at(&world, 3.0, 0.0, 0.0);

        let mut bodies = world.write_storage::<RigidBodyComponent>();
        assert!(test_collision(&mut bodies, a, b).unwrap());
        assert!(bodies.get(a).unwrap().0.is_colliding_with(b));
        assert!(bodies.get(b).unwrap().0.is_colliding_with(a));

        assert!(!test_collision(&mut bodies, c, a).unwrap());
        assert!(!bodies.get(a).unwrap().0.is_colliding_with(c));
        assert!(!bodies.get(c).unwrap().0.has_collisions());

        // b and c overlap too; the result does not depend on the order.
        assert!(test_collision(&mut bodies, c, b).unwrap());
        assert!(test_collision(&mut bodies, b, c).unwrap());
        assert_eq!(bodies.get(b).unwrap().0.colliding().len(), 2);
    }

    #[test]
    fn test_collision_missing_body() {
        let mut world = setup();
        let a = cube_at(&world, 0.0, 0.0, 0.0);
        let bare = world.create_entity().build();

        let mut bodies = world.write_storage::<RigidBodyComponent>();
        match test_collision(&mut bodies, a, bare) {
            Err(CollisionError::MissingBody(e)) => assert_eq!(e, bare),
            other => panic!("unexpected result {:?}", other),
        }
        assert!(!bodies.get(a).unwrap().0.has_collisions());
    }

    #[test]
    fn test_collision_with_own_handle() {
        let world = setup();
        let a = cube_at(&world, 1.0, 2.0, 3.0);

        let mut bodies = world.write_storage::<RigidBodyComponent>();
        assert!(test_collision(&mut bodies, a, a).unwrap());
        let body = &bodies.get(a).unwrap().0;
        assert!(body.is_colliding_with(a));
        assert_eq!(body.colliding().len(), 1);
    }

    #[test]
    fn test_remove_body_unlinks_partners() {
        let mut world = setup();
        let a = cube_at(&world, 0.0, 0.0, 0.0);
        let b = cube_at(&world, 1.0, 0.0, 0.0);
        let c = cube_at(&world, 0.0, 1.0, 0.0);
        {
            let mut bodies = world.write_storage::<RigidBodyComponent>();
            assert!(test_collision(&mut bodies, a, b).unwrap());
            assert!(test_collision(&mut bodies, a, c).unwrap());
            assert!(test_collision(&mut bodies, b, c).unwrap());
        }

        remove_body(&mut world, a).unwrap();
        assert!(!world.is_alive(a));

        let bodies = world.read_storage::<RigidBodyComponent>();
        assert!(bodies.get(a).is_none());
        let body_b = &bodies.get(b).unwrap().0;
        let body_c = &bodies.get(c).unwrap().0;
        assert!(!body_b.is_colliding_with(a));
        assert!(!body_c.is_colliding_with(a));
        assert!(body_b.is_colliding_with(c));
        assert!(body_c.is_colliding_with(b));
    }

    #[test]
    fn test_remove_body_twice() {
        let mut world = setup();
        let a = cube_at(&world, 0.0, 0.0, 0.0);
        remove_body(&mut world, a).unwrap();
        match remove_body(&mut world, a) {
            Err(CollisionError::MissingBody(e)) => assert_eq!(e, a),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
