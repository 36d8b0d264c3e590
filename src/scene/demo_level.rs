use glam::Vec2;
use hecs::Entity;

use crate::geometry::GeometryError;
use crate::scene::prefabs::{spawn_death_box, spawn_enemy, spawn_platform, spawn_player};
use crate::simulation::Simulation;

/// The sample layout is authored on an 800x600 pixel screen.
const PIXELS_PER_UNIT: f32 = 600.0;

fn px(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y) / PIXELS_PER_UNIT
}

/// Handles to the interesting entities of the demo level.
pub struct DemoLevel {
    pub player: Entity,
    pub enemies: Vec<Entity>,
}

/// Build the demo level: a player above two platforms, two patrolling
/// enemies and a kill floor below the screen.
pub fn load_demo_level(sim: &mut Simulation) -> Result<DemoLevel, GeometryError> {
    let world = sim.world_mut();

    let player = spawn_player(world, px(200.0, 300.0), px(50.0, 50.0))?;

    let enemies = vec![
        spawn_enemy(
            world,
            px(500.0, 300.0),
            px(50.0, 100.0),
            px(100.0, 0.0),
            2.0,
            Vec2::new(1.0, 0.0),
        )?,
        spawn_enemy(
            world,
            px(50.0, 50.0),
            px(144.0, 100.0),
            px(0.0, 150.0),
            1.0,
            Vec2::new(0.0, 1.0),
        )?,
    ];

    spawn_platform(world, px(400.0, 400.0), px(800.0, 20.0))?;
    spawn_platform(world, px(0.0, 580.0), px(800.0, 20.0))?;
    spawn_death_box(world, px(-200.0, 700.0), px(1200.0, 50.0))?;

    Ok(DemoLevel { player, enemies })
}
