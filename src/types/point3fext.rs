use crate::types::prelude::*;

pub trait Point3fExt {
    /// Componentwise comparison within the float epsilon.
    fn almost_eq(&self, p: &Point3f) -> bool;
}

impl Point3fExt for Point3f {
    fn almost_eq(&self, p: &Point3f) -> bool {
        self.coords.almost_eq(&p.coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_almost_eq() {
        let p = Point3f::new(1.0, -2.0, 3.0);
        assert!(p.almost_eq(&Point3f::new(1.0 + 1.0e-6, -2.0, 3.0)));
        assert!(!p.almost_eq(&Point3f::new(1.0, -2.0, 3.001)));
    }
}
