use crate::collision::RigidBody;
use specs::prelude::*;
use specs_derive::Component;

#[derive(Component, Debug, Clone, Default)]
pub struct RigidBodyComponent(pub RigidBody);

/// Per-tick bookkeeping written by `CollisionSystem`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionStats {
    pub tested_pairs: usize,
    pub colliding_pairs: usize,
    /// Dead partner handles dropped from registries during the tick.
    pub pruned: usize,
}
