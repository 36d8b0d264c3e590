mod character;
mod physics;

pub use character::*;
pub use physics::*;

pub use crate::geometry::Aabb;
