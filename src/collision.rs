mod error;
mod registry;
mod rigid_body;

pub use self::{
    error::{CollisionError, CollisionResult},
    registry::CollisionRegistry,
    rigid_body::{ColliderColors, RigidBody, Visibility},
};
