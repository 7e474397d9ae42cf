use crate::{na::Translation3, types::prelude::*};
use alga::general::SubsetOf;

pub trait Transform3fExt {
    fn new_with_translation(translation: Vector3f) -> Self;

    fn new_with_rotation(translation: Vector3f, axis: &Unit<Vector3f>, angle: f32) -> Self;

    fn translation(&self) -> Point3f {
        Point3f::from(Vector3f::from_vector4f(self.translation_homogeneous()))
    }

    fn translation_homogeneous(&self) -> Vector4f;

    /// The three basis columns of the linear part, i.e. the local X, Y and Z
    /// axes expressed in world space.
    fn basis_axes(&self) -> [Vector3f; 3];
}

impl Transform3fExt for Transform3f {
    fn new_with_translation(translation: Vector3f) -> Transform3f {
        Translation3::from(translation).to_superset()
    }

    fn new_with_rotation(translation: Vector3f, axis: &Unit<Vector3f>, angle: f32) -> Transform3f {
        Isometry3f::from_parts(
            Translation3::from(translation),
            UnitQuaternionf::from_axis_angle(axis, angle),
        )
        .to_superset()
    }

    fn translation_homogeneous(&self) -> Vector4f {
        self.matrix().translation_homogeneous()
    }

    fn basis_axes(&self) -> [Vector3f; 3] {
        let m = self.matrix();
        [
            m.column_to_vector3f(0),
            m.column_to_vector3f(1),
            m.column_to_vector3f(2),
        ]
    }
}
