use crate::{
    ecs::{self, CollisionStats, RigidBodyComponent},
    render::WireframeRenderer,
};
use log::{debug, warn};
use specs::prelude::*;
use std::{cell::RefCell, rc::Rc};

/// Drops dead partners from every registry, then tests each unordered pair
/// of live bodies exactly once.
pub struct CollisionSystem;

impl<'a> System<'a> for CollisionSystem {
    type SystemData = (
        Entities<'a>,
        WriteStorage<'a, RigidBodyComponent>,
        Write<'a, CollisionStats>,
    );

    fn run(&mut self, (entities, mut bodies, mut stats): Self::SystemData) {
        let mut tick = CollisionStats::default();

        for body in (&mut bodies).join() {
            tick.pruned += body.0.colliding_mut().prune_dead(&entities);
        }

        let handles: Vec<Entity> = (&entities, &bodies).join().map(|(e, _)| e).collect();
        for (i, &a) in handles.iter().enumerate() {
            for &b in &handles[i + 1..] {
                tick.tested_pairs += 1;
                match ecs::test_collision(&mut bodies, a, b) {
                    Ok(true) => tick.colliding_pairs += 1,
                    Ok(false) => (),
                    Err(err) => warn!("skipping pair {:?} x {:?}: {}", a, b, err),
                }
            }
        }

        debug!(
            "collision tick: {} pairs tested, {} colliding, {} dead partners pruned",
            tick.tested_pairs, tick.colliding_pairs, tick.pruned
        );
        *stats = tick;
    }
}

/// Submits every body's debug wireframes to the shared renderer.
pub struct DebugDrawSystem<R> {
    pub renderer: Rc<RefCell<R>>,
}

impl<R> DebugDrawSystem<R> {
    pub fn new(renderer: Rc<RefCell<R>>) -> DebugDrawSystem<R> {
        DebugDrawSystem { renderer }
    }
}

impl<'a, R: WireframeRenderer> System<'a> for DebugDrawSystem<R> {
    type SystemData = ReadStorage<'a, RigidBodyComponent>;

    fn run(&mut self, bodies: Self::SystemData) {
        let mut renderer = self.renderer.borrow_mut();
        for body in bodies.join() {
            body.0.add_to_render_list(&mut *renderer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ecs::Entity as BodyEntity,
        render::{RenderList, WireShape},
        types::prelude::*,
    };

    fn setup() -> World {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut world = World::new();
        ecs::register(&mut world);
        world
    }

    fn cube_at(world: &World, x: f32) -> Entity {
        BodyEntity::new_rigid_body_with_transform_w(
            &[Point3f::new(-1.0, -1.0, -1.0), Point3f::new(1.0, 1.0, 1.0)],
            Transform3f::new_with_translation(Vector3f::new(x, 0.0, 0.0)),
            world,
        )
        .entity
    }

    #[test]
    fn test_collision_system_counts_pairs_once() {
        let mut world = setup();
        let a = cube_at(&world, 0.0);
        let b = cube_at(&world, 1.5);
        let c = cube_at(&world, 10.0);
        let d = cube_at(&world, 11.0);

        let mut dispatcher = DispatcherBuilder::new()
            .with(CollisionSystem, "collision", &[])
            .build();
        dispatcher.dispatch(&world.res);
        world.maintain();

        let stats = *world.read_resource::<CollisionStats>();
        assert_eq!(stats.tested_pairs, 6);
        assert_eq!(stats.colliding_pairs, 2);
        assert_eq!(stats.pruned, 0);

        let bodies = world.read_storage::<RigidBodyComponent>();
        let body_a = &bodies.get(a).unwrap().0;
        assert!(body_a.is_colliding_with(b));
        assert_eq!(body_a.colliding().len(), 1);
        assert!(bodies.get(b).unwrap().0.is_colliding_with(a));
        assert!(bodies.get(c).unwrap().0.is_colliding_with(d));
        assert!(bodies.get(d).unwrap().0.is_colliding_with(c));
    }

    #[test]
    fn test_collision_system_prunes_deleted_partners() {
        let mut world = setup();
        let a = cube_at(&world, 0.0);
        let b = cube_at(&world, 1.0);

        let mut dispatcher = DispatcherBuilder::new()
            .with(CollisionSystem, "collision", &[])
            .build();
        dispatcher.dispatch(&world.res);
        assert_eq!(world.read_resource::<CollisionStats>().colliding_pairs, 1);

        // Deleting without `ecs::remove_body` leaves a stale handle behind.
        world.delete_entity(b).unwrap();
        world.maintain();
        assert!(world
            .read_storage::<RigidBodyComponent>()
            .get(a)
            .unwrap()
            .0
            .is_colliding_with(b));

        dispatcher.dispatch(&world.res);
        let stats = *world.read_resource::<CollisionStats>();
        assert_eq!(stats.pruned, 1);
        assert_eq!(stats.tested_pairs, 0);
        assert_eq!(stats.colliding_pairs, 0);
        assert!(!world
            .read_storage::<RigidBodyComponent>()
            .get(a)
            .unwrap()
            .0
            .has_collisions());
    }

    #[test]
    fn test_collision_system_clears_after_moving_apart() {
        let mut world = setup();
        let a = cube_at(&world, 0.0);
        let b = cube_at(&world, 1.0);

        let mut dispatcher = DispatcherBuilder::new()
            .with(CollisionSystem, "collision", &[])
            .build();
        dispatcher.dispatch(&world.res);

        BodyEntity::from(b)
            .set_transform_w(
                &world,
                Transform3f::new_with_translation(Vector3f::new(5.0, 0.0, 0.0)),
            )
            .unwrap();
        dispatcher.dispatch(&world.res);

        assert_eq!(world.read_resource::<CollisionStats>().colliding_pairs, 0);
        let bodies = world.read_storage::<RigidBodyComponent>();
        assert!(!bodies.get(a).unwrap().0.has_collisions());
        assert!(!bodies.get(b).unwrap().0.has_collisions());
    }

    #[test]
    fn test_debug_draw_system() {
        let mut world = setup();
        let a = cube_at(&world, 0.0);
        cube_at(&world, 1.0);
        cube_at(&world, 10.0);
        BodyEntity::from(a)
            .body_mut(&mut world.write_storage())
            .unwrap()
            .set_visible_sphere(true);

        let render_list = Rc::new(RefCell::new(RenderList::new()));
        let mut dispatcher = DispatcherBuilder::new()
            .with(CollisionSystem, "collision", &[])
            .with_thread_local(DebugDrawSystem::new(render_list.clone()))
            .build();
        dispatcher.dispatch(&world.res);
        world.maintain();

        let render_list = render_list.borrow();
        assert_eq!(render_list.len(), 4);
        let spheres = render_list
            .commands()
            .iter()
            .filter(|c| c.shape == WireShape::Sphere)
            .count();
        assert_eq!(spheres, 1);
        let red_cubes = render_list
            .commands()
            .iter()
            .filter(|c| c.shape == WireShape::Cube && c.color == Color::red())
            .count();
        assert_eq!(red_cubes, 2);
    }
}
