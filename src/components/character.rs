use glam::Vec2;
use hecs::Entity;

use crate::fsm::StateMachine;

// ---------------------------------------------------------------------------
// Player components
// ---------------------------------------------------------------------------

/// Marker: velocity is driven by the per-tick control intent.
pub struct Controllable;

/// Edge-detection and attack bookkeeping for a controllable entity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerState {
    /// Jump was pressed and has not been released since.
    pub jump_held: bool,
    /// Attack was pressed and has not been released since.
    pub attack_held: bool,
    /// A disjointed hurtbox spawned by this entity is still alive.
    pub has_hurtbox: bool,
}

/// Horizontal facing, used to place attacks and flip sprites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facing {
    pub right: bool,
}

impl Default for Facing {
    fn default() -> Self {
        Self { right: true }
    }
}

/// Short-lived attack box that follows its host around.
///
/// `host` is a non-owning back-reference; the hurtbox is despawned as soon as
/// the host is gone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisjointedHurtbox {
    /// Seconds left before the hurtbox expires.
    pub remaining: f32,
    pub host: Entity,
}

/// Side an entity fights for. Hurt entities never damage their own side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Player,
    Hostile,
}

// ---------------------------------------------------------------------------
// Enemy components
// ---------------------------------------------------------------------------

/// Back-and-forth patrol route of a kinematic enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Patrol {
    /// Outbound motion per second.
    pub direction: Vec2,
    /// Seconds spent on each leg before turning around.
    pub mirror_time: f32,
    /// Axes reversed on the return leg (1.0 = reversed, 0.0 = kept frozen).
    pub mirror_axis: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PatrolLeg {
    Outbound,
    Return,
}

impl PatrolLeg {
    pub fn flipped(self) -> Self {
        match self {
            Self::Outbound => Self::Return,
            Self::Return => Self::Outbound,
        }
    }
}

pub type PatrolFsm = StateMachine<PatrolLeg>;
