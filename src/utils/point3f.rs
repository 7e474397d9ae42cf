use crate::types::prelude::*;

pub fn min(p1: &Point3f, p2: &Point3f) -> Point3f {
    Point3f::new(
        f32::min(p1.x, p2.x),
        f32::min(p1.y, p2.y),
        f32::min(p1.z, p2.z),
    )
}

pub fn max(p1: &Point3f, p2: &Point3f) -> Point3f {
    Point3f::new(
        f32::max(p1.x, p2.x),
        f32::max(p1.y, p2.y),
        f32::max(p1.z, p2.z),
    )
}

pub fn midpoint(p1: &Point3f, p2: &Point3f) -> Point3f {
    Point3f::from((p1.coords + p2.coords) / 2.0)
}

/// Componentwise min and max over `pts`, or `None` if `pts` is empty.
pub fn bounds(pts: &[Point3f]) -> Option<(Point3f, Point3f)> {
    let (first, rest) = pts.split_first()?;
    Some(
        rest.iter()
            .fold((*first, *first), |(lo, hi), p| (min(&lo, p), max(&hi, p))),
    )
}
