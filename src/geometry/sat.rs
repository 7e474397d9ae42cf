//! Separating axis test between two oriented boxes.
//!
//! Follows the formulation in Ericson, *Real-Time Collision Detection*,
//! section 4.4.1: every quantity is expressed in the frame of the first box,
//! and the candidate axes are tried in a fixed order so that the reported
//! axis is reproducible.

use crate::{geometry::BoundingVolume, types::prelude::*};
use std::fmt;

/// Numeric code reported when no candidate axis separates the boxes.
pub const NO_SEPARATING_AXIS: u8 = 0;

/// A candidate axis along which two oriented boxes are disjoint.
///
/// `A*` and `B*` are the face normals of the first and second box, `AxBy`
/// and friends are the cross products of one edge direction of each box.
/// The declaration order is the order in which the axes are tested.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SeparatingAxis {
    Ax = 1,
    Ay,
    Az,
    Bx,
    By,
    Bz,
    AxBx,
    AxBy,
    AxBz,
    AyBx,
    AyBy,
    AyBz,
    AzBx,
    AzBy,
    AzBz,
}

impl SeparatingAxis {
    pub const ALL: [SeparatingAxis; 15] = [
        SeparatingAxis::Ax,
        SeparatingAxis::Ay,
        SeparatingAxis::Az,
        SeparatingAxis::Bx,
        SeparatingAxis::By,
        SeparatingAxis::Bz,
        SeparatingAxis::AxBx,
        SeparatingAxis::AxBy,
        SeparatingAxis::AxBz,
        SeparatingAxis::AyBx,
        SeparatingAxis::AyBy,
        SeparatingAxis::AyBz,
        SeparatingAxis::AzBx,
        SeparatingAxis::AzBy,
        SeparatingAxis::AzBz,
    ];

    /// Face normal `axis` of the first box.
    pub fn face_a(axis: Axis) -> SeparatingAxis {
        SeparatingAxis::ALL[axis.index()]
    }

    /// Face normal `axis` of the second box.
    pub fn face_b(axis: Axis) -> SeparatingAxis {
        SeparatingAxis::ALL[3 + axis.index()]
    }

    /// Cross product of edge `a` of the first box with edge `b` of the second.
    pub fn edge(a: Axis, b: Axis) -> SeparatingAxis {
        SeparatingAxis::ALL[6 + 3 * a.index() + b.index()]
    }

    /// The local axes of the first and second box this axis is built from.
    pub fn source_axes(self) -> (Option<Axis>, Option<Axis>) {
        let i = self.code() as usize - 1;
        match i {
            0..=2 => (Some(Axis::ALL[i]), None),
            3..=5 => (None, Some(Axis::ALL[i - 3])),
            _ => (Some(Axis::ALL[(i - 6) / 3]), Some(Axis::ALL[(i - 6) % 3])),
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<SeparatingAxis> {
        match code {
            1..=15 => Some(SeparatingAxis::ALL[code as usize - 1]),
            _ => None,
        }
    }
}

impl fmt::Display for SeparatingAxis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = |axis: Axis| match axis {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        match self.source_axes() {
            (Some(a), None) => write!(f, "A{}", name(a)),
            (None, Some(b)) => write!(f, "B{}", name(b)),
            (Some(a), Some(b)) => write!(f, "A{}xB{}", name(a), name(b)),
            (None, None) => unreachable!(),
        }
    }
}

/// Collapses a test result into its numeric code, `NO_SEPARATING_AXIS` for
/// overlapping boxes.
pub fn sat_code(result: Option<SeparatingAxis>) -> u8 {
    result.map_or(NO_SEPARATING_AXIS, SeparatingAxis::code)
}

/// Looks for an axis separating the oriented boxes of `a` and `b`.
///
/// Each box is the local box of the volume carried by its world transform.
/// The box axes are the first three columns of the transform. Returns the
/// first separating axis in `SeparatingAxis::ALL` order, or `None` when the
/// boxes intersect.
pub fn find_separating_axis(a: &BoundingVolume, b: &BoundingVolume) -> Option<SeparatingAxis> {
    let axes_a = a.transform().basis_axes();
    let axes_b = b.transform().basis_axes();
    let ea = a.half_width();
    let eb = b.half_width();

    // B's axes in A's frame.
    let r = Matrix3f::from_fn(|i, j| axes_a[i].dot(&axes_b[j]));

    let d = b.center_global() - a.center_global();
    let t = Vector3f::new(d.dot(&axes_a[0]), d.dot(&axes_a[1]), d.dot(&axes_a[2]));

    // Epsilon keeps near-parallel edge pairs, whose cross product is almost
    // null, from reporting a false separation.
    let abs_r = r.map(|x| x.abs() + std::f32::EPSILON);

    for &axis in &Axis::ALL {
        let i = axis.index();
        let ra = ea[i];
        let rb = eb[0] * abs_r[(i, 0)] + eb[1] * abs_r[(i, 1)] + eb[2] * abs_r[(i, 2)];
        if t[i].abs() > ra + rb {
            return Some(SeparatingAxis::face_a(axis));
        }
    }

    for &axis in &Axis::ALL {
        let j = axis.index();
        let ra = ea[0] * abs_r[(0, j)] + ea[1] * abs_r[(1, j)] + ea[2] * abs_r[(2, j)];
        let rb = eb[j];
        let dist = t[0] * r[(0, j)] + t[1] * r[(1, j)] + t[2] * r[(2, j)];
        if dist.abs() > ra + rb {
            return Some(SeparatingAxis::face_b(axis));
        }
    }

    // L = A_i x B_j. With (i, i1, i2) and (j, j1, j2) cyclic:
    //   ra   = ea[i1] |R[i2][j]| + ea[i2] |R[i1][j]|
    //   rb   = eb[j1] |R[i][j2]| + eb[j2] |R[i][j1]|
    //   dist = t[i2] R[i1][j] - t[i1] R[i2][j]
    for &a_axis in &Axis::ALL {
        let i = a_axis.index();
        let (i1, i2) = ((i + 1) % 3, (i + 2) % 3);
        for &b_axis in &Axis::ALL {
            let j = b_axis.index();
            let (j1, j2) = ((j + 1) % 3, (j + 2) % 3);
            let ra = ea[i1] * abs_r[(i2, j)] + ea[i2] * abs_r[(i1, j)];
            let rb = eb[j1] * abs_r[(i, j2)] + eb[j2] * abs_r[(i, j1)];
            let dist = t[i2] * r[(i1, j)] - t[i1] * r[(i2, j)];
            if dist.abs() > ra + rb {
                return Some(SeparatingAxis::edge(a_axis, b_axis));
            }
        }
    }

    None
}
