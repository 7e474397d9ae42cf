#![allow(unknown_lints)]
#![warn(clippy::all)]

use failure::Error;
use log::info;
use obbsat::{
    collision::{ColliderColors, Visibility},
    ecs::{
        self, entity::Entity, CollisionStats, CollisionSystem, DebugDrawSystem, RigidBodyComponent,
    },
    render::{RenderList, WireShape},
    types::prelude::*,
};
use specs::prelude::*;
use std::{cell::RefCell, f32::consts::PI, rc::Rc};

const TICKS: usize = 12;

fn main() -> Result<(), Error> {
    env_logger::init();

    let mut world = World::new();
    ecs::register(&mut world);

    let ground = Entity::new_rigid_body_with_transform_w(
        &[Point3f::new(-10.0, -0.5, -10.0), Point3f::new(10.0, 0.5, 10.0)],
        Transform3f::new_with_translation(Vector3f::new(0.0, -1.0, 0.0)),
        &world,
    );
    // A thin bar spinning about y just above the ground.
    let spinner = Entity::new_rigid_body_w(
        &[Point3f::new(-3.0, -0.25, -0.25), Point3f::new(3.0, 0.25, 0.25)],
        &world,
    );
    // A cube sliding along x through the bar's sweep.
    let slider = Entity::new_rigid_body_w(
        &[Point3f::new(-0.5, -0.5, -0.5), Point3f::new(0.5, 0.5, 0.5)],
        &world,
    );
    spinner
        .body_mut(&mut world.write_storage())?
        .set_visibility(Visibility::OBB | Visibility::ARBB);
    {
        let mut bodies = world.write_storage::<RigidBodyComponent>();
        let body = slider.body_mut(&mut bodies)?;
        body.set_visibility(Visibility::all());
        body.set_colors(ColliderColors {
            colliding: Color::red(),
            not_colliding: Color::cornflower_blue(),
        });
    }

    let render_list = Rc::new(RefCell::new(RenderList::new()));
    let mut dispatcher = DispatcherBuilder::new()
        .with(CollisionSystem, "collision", &[])
        .with_thread_local(DebugDrawSystem::new(render_list.clone()))
        .build();

    let names = [(ground, "ground"), (spinner, "spinner"), (slider, "slider")];
    let y_axis = Vector3f::y_axis();
    for tick in 0..TICKS {
        let t = tick as f32 / TICKS as f32;
        spinner.set_transform_w(
            &world,
            Transform3f::new_with_rotation(Vector3f::new(0.0, 0.5, 0.0), &y_axis, t * PI),
        )?;
        slider.set_transform_w(
            &world,
            Transform3f::new_with_translation(Vector3f::new(-6.0 + 12.0 * t, 0.5, 2.0)),
        )?;

        render_list.borrow_mut().clear();
        dispatcher.dispatch(&world.res);
        world.maintain();

        let stats = *world.read_resource::<CollisionStats>();
        info!(
            "tick {}: {} of {} pairs colliding",
            tick, stats.colliding_pairs, stats.tested_pairs
        );
        let bodies = world.read_storage::<RigidBodyComponent>();
        for (entity, name) in names.iter() {
            let body = entity.body(&bodies)?;
            let partners: Vec<&str> = names
                .iter()
                .filter(|(other, _)| body.is_colliding_with(other.entity))
                .map(|(_, other_name)| *other_name)
                .collect();
            info!("  {} touches {:?}", name, partners);
        }
        let render_list = render_list.borrow();
        let spheres = render_list
            .commands()
            .iter()
            .filter(|c| c.shape == WireShape::Sphere)
            .count();
        info!(
            "  {} wireframes ({} spheres)",
            render_list.len(),
            spheres
        );
    }

    ecs::remove_body(&mut world, spinner.entity)?;
    dispatcher.dispatch(&world.res);
    world.maintain();
    let stats = *world.read_resource::<CollisionStats>();
    info!(
        "spinner removed: {} of {} pairs colliding",
        stats.colliding_pairs, stats.tested_pairs
    );
    Ok(())
}
