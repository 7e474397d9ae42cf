const FLOAT_COMPARISON_EPSILON: f32 = 1.0e-5;

pub fn almost_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= FLOAT_COMPARISON_EPSILON
}
