//! Hopper: the simulation core of a 2D platformer.
//!
//! Entities live in a `hecs` world. Each tick runs a fixed sequence of
//! systems: controllers, gravity, swept-AABB collision detection, physics
//! resolution, then the one-shot consumers (ceiling bumps, deaths).
//! Rendering, audio and level loading are left to the host game, which reads
//! positions and flags back out of the world.

pub mod components;
pub mod config;
pub mod fsm;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod scene;
pub mod simulation;
pub mod systems;

pub use config::SimConfig;
pub use input::ControlIntent;
pub use simulation::{Advance, Simulation, StepReport};
