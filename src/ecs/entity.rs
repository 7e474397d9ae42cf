use crate::{
    collision::{CollisionError, CollisionResult, RigidBody},
    ecs::RigidBodyComponent,
    types::prelude::*,
};
use specs::{storage::MaskedStorage, Builder, WriteStorage};
use std::ops::{Deref, DerefMut};

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Entity {
    pub entity: specs::Entity,
}

impl From<specs::Entity> for Entity {
    fn from(entity: specs::Entity) -> Entity {
        Entity { entity }
    }
}

impl Entity {
    pub fn new_rigid_body(
        points: &[Point3f],
        entities: &specs::Entities,
        storage: &mut WriteStorage<RigidBodyComponent>,
    ) -> Entity {
        let entity = entities
            .build_entity()
            .with(RigidBodyComponent(RigidBody::new(points)), storage)
            .build();
        Entity { entity }
    }

    pub fn new_rigid_body_w(points: &[Point3f], world: &specs::World) -> Entity {
        Entity::new_rigid_body(points, &world.entities(), &mut world.write_storage())
    }

    /// Creates a body with the given transform already applied.
    pub fn new_rigid_body_with_transform_w(
        points: &[Point3f],
        transform: Transform3f,
        world: &specs::World,
    ) -> Entity {
        let mut body = RigidBody::new(points);
        body.set_transform(transform);
        let entity = world
            .create_entity_unchecked()
            .with(RigidBodyComponent(body))
            .build();
        Entity { entity }
    }

    pub fn body<'a, D>(
        self,
        storage: &'a specs::Storage<RigidBodyComponent, D>,
    ) -> CollisionResult<&'a RigidBody>
    where
        D: Deref<Target = MaskedStorage<RigidBodyComponent>>,
    {
        storage
            .get(self.entity)
            .map(|c| &c.0)
            .ok_or(CollisionError::MissingBody(self.entity))
    }

    pub fn body_mut<'a, D>(
        self,
        storage: &'a mut specs::Storage<RigidBodyComponent, D>,
    ) -> CollisionResult<&'a mut RigidBody>
    where
        D: DerefMut<Target = MaskedStorage<RigidBodyComponent>>,
    {
        storage
            .get_mut(self.entity)
            .map(|c| &mut c.0)
            .ok_or(CollisionError::MissingBody(self.entity))
    }

    pub fn set_transform(
        self,
        storage: &mut WriteStorage<RigidBodyComponent>,
        transform: Transform3f,
    ) -> CollisionResult<()> {
        self.body_mut(storage)?.set_transform(transform);
        Ok(())
    }

    pub fn set_transform_w(self, world: &specs::World, transform: Transform3f) -> CollisionResult<()> {
        self.set_transform(&mut world.write_storage(), transform)
    }
}
