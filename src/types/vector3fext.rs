use crate::{types::prelude::*, utils::f32};

pub trait Vector3fExt {
    fn from_vector4f(v: Vector4f) -> Vector3f {
        Vector3f::new(v.x, v.y, v.z)
    }

    fn almost_eq(&self, v: &Vector3f) -> bool;

    /// Componentwise `self >= 0` (within the comparison epsilon).
    fn is_non_negative(&self) -> bool;
}

impl Vector3fExt for Vector3f {
    fn almost_eq(&self, v: &Vector3f) -> bool {
        f32::almost_eq(self.x, v.x) && f32::almost_eq(self.y, v.y) && f32::almost_eq(self.z, v.z)
    }

    fn is_non_negative(&self) -> bool {
        self.iter().all(|c| *c >= 0.0 || f32::almost_eq(*c, 0.0))
    }
}
