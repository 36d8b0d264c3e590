use glam::Vec2;

use crate::geometry::Sweep;

/// Displacement over one full tick (already scaled by the tick length).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity(pub Vec2);

/// Marker + strength: entity is pulled downward every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    /// Gravitational acceleration magnitude, in pixel-space units.
    pub force: f32,
}

impl Default for Gravity {
    fn default() -> Self {
        Self { force: 9.81 }
    }
}

/// Marker: a mover. Swept against passive colliders, paired with other actives for damage.
pub struct ActiveCollider;

/// Marker: static level geometry that actives collide against.
pub struct PassiveCollider;

/// Marker: deals damage to overlapping active entities.
pub struct Hurt;

/// Earliest contact found this tick. Written by the collision system,
/// consumed and removed by the physics system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    pub time: f32,
    pub normal: Vec2,
}

impl From<Sweep> for Collision {
    fn from(sweep: Sweep) -> Self {
        Self {
            time: sweep.time,
            normal: sweep.normal,
        }
    }
}

/// Marker: resting on a floor as of the last physics step.
pub struct Grounded;

/// One-shot marker: upward motion must stop this tick.
pub struct CeilingBump;

/// One-shot marker: took damage this tick.
pub struct MarkOfDeath;

/// Marker: MarkOfDeath is cleared instead of despawning the entity.
pub struct Invincible;
