mod collision;
mod death;
mod enemy;
mod gravity;
mod physics;
mod player;

pub use collision::{collision_system, hurt_system, sweep_system, HurtEvent};
pub use death::{death_system, Death, DeathKind};
pub use enemy::patrol_system;
pub use gravity::gravity_system;
pub use physics::{ceiling_bump_system, physics_system};
pub use player::{hurtbox_system, player_input_system};
