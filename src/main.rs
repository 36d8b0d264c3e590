use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hopper::components::{Aabb, Velocity};
use hopper::logging::init_logging;
use hopper::scene::load_demo_level;
use hopper::systems::DeathKind;
use hopper::{ControlIntent, SimConfig, Simulation};
use tracing::info;

#[derive(Parser)]
#[command(name = "hopper", about = "Headless run of the hopper demo level")]
struct Args {
    /// JSON file overriding simulation constants
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of ticks to run
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Tick length in seconds (defaults to the config's fixed_dt)
    #[arg(long)]
    dt: Option<f32>,

    /// Horizontal input held for the whole run: -1, 0 or 1
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    walk: f32,

    /// Press jump every N ticks (0 disables)
    #[arg(long, default_value_t = 90)]
    jump_every: u64,

    /// Ticks to keep jump held after each press; a shorter hold cuts the jump
    #[arg(long, default_value_t = 30)]
    jump_hold: u64,

    /// Press attack for one tick every N ticks (0 disables)
    #[arg(long, default_value_t = 45)]
    attack_every: u64,
}

/// Whether a button pressed every `every` ticks and held for `hold` ticks
/// is down at `tick`.
fn held(tick: u64, every: u64, hold: u64) -> bool {
    every != 0 && tick % every < hold.max(1)
}

fn main() -> Result<()> {
    init_logging()?;
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimConfig::from_json_file(path)?,
        None => SimConfig::default(),
    };
    let dt = args.dt.unwrap_or(config.fixed_dt);

    let mut sim = Simulation::new(config).context("invalid simulation config")?;
    let level = load_demo_level(&mut sim).context("demo level has invalid geometry")?;
    info!(enemies = level.enemies.len(), ticks = args.ticks, dt, "starting headless run");

    for tick in 0..args.ticks {
        let intent = ControlIntent::walk(args.walk)
            .with_jump(held(tick, args.jump_every, args.jump_hold))
            .with_attack(held(tick, args.attack_every, 1));
        sim.set_intent(intent);

        let report = sim.step(dt);

        for death in &report.deaths {
            info!(tick, entity = ?death.entity, kind = ?death.kind, "entity died");
        }
        if report.deaths.iter().any(|d| d.kind == DeathKind::Player) {
            info!(tick, "player died, stopping");
            break;
        }
        if report.level_cleared {
            info!(tick, "level cleared, stopping");
            break;
        }
    }

    let world = sim.world();
    if let (Ok(aabb), Ok(vel)) = (
        world.get::<&Aabb>(level.player),
        world.get::<&Velocity>(level.player),
    ) {
        info!(
            x = aabb.position.x,
            y = aabb.position.y,
            vx = vel.0.x,
            vy = vel.0.y,
            "final player state"
        );
    }
    info!(ticks = sim.tick(), entities = world.len(), "done");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_is_held_for_the_hold_window() {
        let down: Vec<u64> = (0..100).filter(|&t| held(t, 90, 30)).collect();
        assert_eq!(down.len(), 40);
        assert!(down[..30].iter().copied().eq(0..30));
        assert!(down[30..].iter().copied().eq(90..100));
    }

    #[test]
    fn test_single_tick_presses() {
        assert!(held(45, 45, 1));
        assert!(!held(46, 45, 1));
        // A zero hold still presses for one tick.
        assert!(held(0, 45, 0));
        assert!(!held(0, 0, 30));
    }
}
