mod bounding_volume;
pub mod sat;

pub use self::{
    bounding_volume::BoundingVolume,
    sat::{find_separating_axis, SeparatingAxis},
};
