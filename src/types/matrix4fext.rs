use crate::types::prelude::*;

pub trait Matrix4fExt {
    fn translation_homogeneous(&self) -> Vector4f;

    fn column_to_vector3f(&self, c: usize) -> Vector3f;

    /// `self * translate(offset) * scale(scale)`, the model matrix of a
    /// wireframe shape placed relative to `self`.
    fn translated_scaled(&self, offset: &Vector3f, scale: &Vector3f) -> Matrix4f;
}

impl Matrix4fExt for Matrix4f {
    fn translation_homogeneous(&self) -> Vector4f {
        let col = self.column(3);
        Vector4f::new(col[0], col[1], col[2], col[3])
    }

    fn column_to_vector3f(&self, c: usize) -> Vector3f {
        let col = self.column(c);
        Vector3f::new(col[0], col[1], col[2])
    }

    fn translated_scaled(&self, offset: &Vector3f, scale: &Vector3f) -> Matrix4f {
        self * Matrix4f::new_translation(offset) * Matrix4f::new_nonuniform_scaling(scale)
    }
}
