pub mod f32;
pub mod point3f;
