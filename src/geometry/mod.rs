//! Axis-aligned boxes and the pure queries the collision systems build on.
//!
//! Level space is screen-like: x grows to the right, y grows downward, so a
//! box's `top` is its smallest y and a positive y velocity means falling.

use std::fmt;

use glam::Vec2;

mod swept;

pub use swept::{swept, Sweep};

/// Velocity components at or below this magnitude are treated as zero.
pub const VELOCITY_EPSILON: f32 = 1e-4;

/// Penetration depth still treated as surface contact. Absorbs the rounding
/// left over after a box is moved onto a surface.
pub const CONTACT_SKIN: f32 = 1e-5;

/// Rejected box construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// One of the dimension components is negative (or NaN).
    InvalidDimension { dimension: Vec2 },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidDimension { dimension } => write!(
                f,
                "box dimension must be non-negative, got ({}, {})",
                dimension.x, dimension.y
            ),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Axis-aligned bounding box: top-left corner plus non-negative size.
///
/// The dimension is only settable through [`Aabb::new`], which keeps it
/// non-negative. The position is free to move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub position: Vec2,
    dimension: Vec2,
}

impl Aabb {
    pub fn new(position: Vec2, dimension: Vec2) -> Result<Self, GeometryError> {
        // Written as a negated `>=` so NaN is rejected too.
        if !(dimension.x >= 0.0 && dimension.y >= 0.0) {
            return Err(GeometryError::InvalidDimension { dimension });
        }
        Ok(Self { position, dimension })
    }

    pub fn dimension(&self) -> Vec2 {
        self.dimension
    }

    pub fn left(&self) -> f32 {
        self.position.x
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.dimension.x
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.dimension.y
    }

    /// Bottom-right corner.
    pub fn extent(&self) -> Vec2 {
        self.position + self.dimension
    }

    /// Same box moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            position: self.position + offset,
            dimension: self.dimension,
        }
    }

    /// Inclusive overlap test: boxes that only share an edge overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        !(self.right() < other.left()
            || self.left() > other.right()
            || self.bottom() < other.top()
            || self.top() > other.bottom())
    }

    /// Whether `other` lies entirely inside this box (edges included).
    pub fn contains(&self, other: &Aabb) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    /// Broad-phase box: the union of this box and this box moved by `velocity`.
    ///
    /// Anything the box can touch during one tick of motion lies inside it,
    /// so a miss here rules out the swept test.
    pub fn broad_box(&self, velocity: Vec2) -> Aabb {
        let moved = self.position + velocity;
        let position = self.position.min(moved);
        let dimension = self.position.max(moved) + self.dimension - position;
        Aabb { position, dimension }
    }
}
