#![allow(unknown_lints)]
#![warn(clippy::all)]

use nalgebra as na;

pub mod collision;
pub mod ecs;
pub mod geometry;
pub mod render;
pub mod types;
mod utils;

pub use crate::types::prelude::*;
