use crate::{types::prelude::*, utils::point3f};
use log::{debug, warn};

/// Box and sphere bounds of a point cloud, together with the world transform
/// that places them.
///
/// The local box is the tightest axis-aligned box around the input points in
/// object space. The global box is the axis-aligned box around the eight
/// transformed corners of the local box, so it is conservative for rotated
/// transforms.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingVolume {
    min_local: Point3f,
    max_local: Point3f,
    center_local: Point3f,
    half_width: Vector3f,
    radius: f32,

    transform: Transform3f,
    min_global: Point3f,
    max_global: Point3f,
    global_extent: Vector3f,
    revision: u64,
}

impl Default for BoundingVolume {
    fn default() -> BoundingVolume {
        BoundingVolume::degenerate()
    }
}

impl BoundingVolume {
    /// All bounds collapsed onto the origin.
    pub fn degenerate() -> BoundingVolume {
        BoundingVolume {
            min_local: Point3f::origin(),
            max_local: Point3f::origin(),
            center_local: Point3f::origin(),
            half_width: Vector3f::zeros(),
            radius: 0.0,
            transform: Transform3f::identity(),
            min_global: Point3f::origin(),
            max_global: Point3f::origin(),
            global_extent: Vector3f::zeros(),
            revision: 0,
        }
    }

    /// Builds the bounds of `points`. An empty slice yields
    /// `BoundingVolume::degenerate()`.
    pub fn from_points(points: &[Point3f]) -> BoundingVolume {
        let (min, max) = match point3f::bounds(points) {
            Some(bounds) => bounds,
            None => {
                warn!("bounding volume built from an empty point list, using zero bounds");
                return BoundingVolume::degenerate();
            }
        };
        BoundingVolume::from_min_max(min, max)
    }

    /// Builds the bounds of the box spanned by `min` and `max`. The corners
    /// are sorted componentwise first.
    pub fn from_min_max(min: Point3f, max: Point3f) -> BoundingVolume {
        let (min, max) = (point3f::min(&min, &max), point3f::max(&min, &max));
        let center = point3f::midpoint(&min, &max);
        BoundingVolume {
            min_local: min,
            max_local: max,
            center_local: center,
            half_width: (max - min) / 2.0,
            radius: crate::na::distance(&center, &min),
            transform: Transform3f::identity(),
            min_global: min,
            max_global: max,
            global_extent: max - min,
            revision: 0,
        }
    }

    /// Sets the local-to-world transform and recomputes the global box.
    /// Assigning the transform that is already set does nothing.
    pub fn set_transform(&mut self, transform: Transform3f) {
        if transform == self.transform {
            return;
        }
        self.transform = transform;

        let mut corners = self.corners_local();
        for corner in corners.iter_mut() {
            *corner = self.transform * *corner;
        }
        if let Some((min, max)) = point3f::bounds(&corners) {
            self.min_global = min;
            self.max_global = max;
        }
        self.global_extent = self.max_global - self.min_global;
        self.revision += 1;
        debug!(
            "global bounds recomputed: min {:?} max {:?} (revision {})",
            self.min_global, self.max_global, self.revision
        );
    }

    /// The eight corners of the local box. The first four lie on the
    /// `min.z` face, the last four on the `max.z` face.
    pub fn corners_local(&self) -> [Point3f; 8] {
        let (min, max) = (self.min_local, self.max_local);
        [
            min,
            Point3f::new(max.x, min.y, min.z),
            Point3f::new(min.x, max.y, min.z),
            Point3f::new(max.x, max.y, min.z),
            Point3f::new(min.x, min.y, max.z),
            Point3f::new(max.x, min.y, max.z),
            Point3f::new(min.x, max.y, max.z),
            max,
        ]
    }

    pub fn min_local(&self) -> Point3f {
        self.min_local
    }

    pub fn max_local(&self) -> Point3f {
        self.max_local
    }

    pub fn center_local(&self) -> Point3f {
        self.center_local
    }

    /// The local center placed in world space.
    pub fn center_global(&self) -> Point3f {
        self.transform * self.center_local
    }

    pub fn min_global(&self) -> Point3f {
        self.min_global
    }

    pub fn max_global(&self) -> Point3f {
        self.max_global
    }

    pub fn global_extent(&self) -> Vector3f {
        self.global_extent
    }

    pub fn half_width(&self) -> Vector3f {
        self.half_width
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn transform(&self) -> &Transform3f {
        &self.transform
    }

    /// How many times the global box has been recomputed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the bounding spheres intersect. The radii are used as they
    /// are, without the scale of either transform.
    pub fn spheres_overlap(&self, other: &BoundingVolume) -> bool {
        crate::na::distance(&self.center_global(), &other.center_global())
            < self.radius + other.radius
    }
}
