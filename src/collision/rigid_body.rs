use crate::{
    collision::CollisionRegistry,
    geometry::{sat, BoundingVolume, SeparatingAxis},
    render::WireframeRenderer,
    types::prelude::*,
};
use bitflags::bitflags;
use log::trace;
use specs::Entity;

bitflags! {
    /// Which debug wireframes `RigidBody::add_to_render_list` submits.
    pub struct Visibility: u8 {
        /// Bounding sphere.
        const SPHERE = 0b001;
        /// Oriented box, i.e. the local box carried by the transform.
        const OBB = 0b010;
        /// Axis-aligned box around the oriented one, in world space.
        const ARBB = 0b100;
    }
}

impl Default for Visibility {
    fn default() -> Visibility {
        Visibility::OBB
    }
}

/// Colors of the oriented box wireframe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderColors {
    pub colliding: Color,
    pub not_colliding: Color,
}

impl Default for ColliderColors {
    fn default() -> ColliderColors {
        ColliderColors {
            colliding: Color::red(),
            not_colliding: Color::white(),
        }
    }
}

/// A bounding volume plus the set of bodies it currently overlaps.
///
/// Cloning copies the collision registry as well, so a clone starts out
/// believing it overlaps whatever its source body did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RigidBody {
    volume: BoundingVolume,
    colliding: CollisionRegistry,
    visibility: Visibility,
    colors: ColliderColors,
}

impl RigidBody {
    pub fn new(points: &[Point3f]) -> RigidBody {
        RigidBody::from_volume(BoundingVolume::from_points(points))
    }

    pub fn from_volume(volume: BoundingVolume) -> RigidBody {
        RigidBody {
            volume,
            ..RigidBody::default()
        }
    }

    /// Forgets every partner. Partners keep this body in their own
    /// registries until they are tested against it again.
    pub fn release(&mut self) {
        self.clear_colliding_list();
    }

    pub fn volume(&self) -> &BoundingVolume {
        &self.volume
    }

    pub fn set_transform(&mut self, transform: Transform3f) {
        self.volume.set_transform(transform);
    }

    pub fn transform(&self) -> &Transform3f {
        self.volume.transform()
    }

    pub fn radius(&self) -> f32 {
        self.volume.radius()
    }

    pub fn half_width(&self) -> Vector3f {
        self.volume.half_width()
    }

    pub fn center_local(&self) -> Point3f {
        self.volume.center_local()
    }

    pub fn center_global(&self) -> Point3f {
        self.volume.center_global()
    }

    pub fn min_local(&self) -> Point3f {
        self.volume.min_local()
    }

    pub fn max_local(&self) -> Point3f {
        self.volume.max_local()
    }

    pub fn min_global(&self) -> Point3f {
        self.volume.min_global()
    }

    pub fn max_global(&self) -> Point3f {
        self.volume.max_global()
    }

    pub fn global_extent(&self) -> Vector3f {
        self.volume.global_extent()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    pub fn visible_sphere(&self) -> bool {
        self.visibility.contains(Visibility::SPHERE)
    }

    pub fn set_visible_sphere(&mut self, visible: bool) {
        self.visibility.set(Visibility::SPHERE, visible);
    }

    pub fn visible_obb(&self) -> bool {
        self.visibility.contains(Visibility::OBB)
    }

    pub fn set_visible_obb(&mut self, visible: bool) {
        self.visibility.set(Visibility::OBB, visible);
    }

    pub fn visible_arbb(&self) -> bool {
        self.visibility.contains(Visibility::ARBB)
    }

    pub fn set_visible_arbb(&mut self, visible: bool) {
        self.visibility.set(Visibility::ARBB, visible);
    }

    pub fn colors(&self) -> ColliderColors {
        self.colors
    }

    pub fn set_colors(&mut self, colors: ColliderColors) {
        self.colors = colors;
    }

    pub fn color_colliding(&self) -> Color {
        self.colors.colliding
    }

    pub fn set_color_colliding(&mut self, color: Color) {
        self.colors.colliding = color;
    }

    pub fn color_not_colliding(&self) -> Color {
        self.colors.not_colliding
    }

    pub fn set_color_not_colliding(&mut self, color: Color) {
        self.colors.not_colliding = color;
    }

    pub fn colliding(&self) -> &CollisionRegistry {
        &self.colliding
    }

    pub fn colliding_mut(&mut self) -> &mut CollisionRegistry {
        &mut self.colliding
    }

    pub fn add_collision_with(&mut self, other: Entity) {
        self.colliding.add(other);
    }

    pub fn remove_collision_with(&mut self, other: Entity) {
        self.colliding.remove(other);
    }

    pub fn clear_colliding_list(&mut self) {
        self.colliding.clear();
    }

    pub fn is_colliding_with(&self, other: Entity) -> bool {
        self.colliding.contains(other)
    }

    pub fn has_collisions(&self) -> bool {
        !self.colliding.is_empty()
    }

    /// Adds or removes `other` depending on the outcome of a test.
    pub fn record_collision(&mut self, other: Entity, colliding: bool) {
        if colliding {
            self.add_collision_with(other);
        } else {
            self.remove_collision_with(other);
        }
    }

    pub fn separating_axis(&self, other: &RigidBody) -> Option<SeparatingAxis> {
        sat::find_separating_axis(&self.volume, &other.volume)
    }

    /// Sphere pre-test followed by the separating axis test. No registry is
    /// touched.
    pub fn overlaps(&self, other: &RigidBody) -> bool {
        if !self.volume.spheres_overlap(&other.volume) {
            trace!("bounding spheres apart");
            return false;
        }
        match self.separating_axis(other) {
            Some(axis) => {
                trace!("separated on {}", axis);
                false
            }
            None => true,
        }
    }

    /// Tests this body, known as `this`, against `other`, known as
    /// `other_entity`, and updates both registries with the result.
    pub fn test_collision(
        &mut self,
        this: Entity,
        other: &mut RigidBody,
        other_entity: Entity,
    ) -> bool {
        let colliding = self.overlaps(other);
        self.record_collision(other_entity, colliding);
        other.record_collision(this, colliding);
        colliding
    }

    /// Submits the visible wireframes. The oriented box takes the colliding
    /// color while the registry is non-empty.
    pub fn add_to_render_list<R: WireframeRenderer + ?Sized>(&self, renderer: &mut R) {
        let model = self.transform().matrix();
        let center = self.center_local().coords;
        if self.visible_sphere() {
            renderer.add_wire_sphere(
                &model.translated_scaled(&center, &Vector3f::from_element(self.radius())),
                Color::cornflower_blue(),
            );
        }
        if self.visible_obb() {
            let color = if self.has_collisions() {
                self.colors.colliding
            } else {
                self.colors.not_colliding
            };
            renderer.add_wire_cube(
                &model.translated_scaled(&center, &(self.half_width() * 2.0)),
                color,
            );
        }
        if self.visible_arbb() {
            renderer.add_wire_cube(
                &Matrix4f::identity()
                    .translated_scaled(&self.center_global().coords, &self.global_extent()),
                Color::yellow(),
            );
        }
    }
}
