pub use crate::na::{Translation3, Unit};
pub use crate::types::{
    f32ext::F32Ext, matrix4fext::Matrix4fExt, point3fext::Point3fExt,
    transform3fext::Transform3fExt, vector3fext::Vector3fExt, Axis, Color, Isometry3f, Matrix3f,
    Matrix4f, Point3f, Transform3f, UnitQuaternionf, Vector3f, Vector4f,
};
