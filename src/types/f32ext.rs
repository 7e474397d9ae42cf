use crate::utils;

pub trait F32Ext {
    fn almost_eq(self, b: f32) -> bool;
}

impl F32Ext for f32 {
    fn almost_eq(self, b: f32) -> bool {
        utils::f32::almost_eq(self, b)
    }
}
