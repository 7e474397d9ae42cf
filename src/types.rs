mod color;
mod f32ext;
mod matrix4fext;
mod point3fext;
pub mod prelude;
mod transform3fext;
mod vector3fext;

pub use crate::types::color::Color;

use crate::na::{Affine3, Isometry3, Matrix3, Matrix4, Point3, UnitQuaternion, Vector3, Vector4};

pub type Matrix3f = Matrix3<f32>;
pub type Matrix4f = Matrix4<f32>;
pub type Vector3f = Vector3<f32>;
pub type Vector4f = Vector4<f32>;
pub type Point3f = Point3<f32>;
pub type UnitQuaternionf = UnitQuaternion<f32>;
pub type Isometry3f = Isometry3<f32>;
pub type Transform3f = Affine3<f32>;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}
