//! The per-tick driver that runs every system in a fixed order.

use hecs::{DynamicBundle, Entity, World};
use tracing::{debug, trace, warn};

use crate::components::Patrol;
use crate::config::SimConfig;
use crate::input::ControlIntent;
use crate::systems::{
    ceiling_bump_system, collision_system, death_system, gravity_system, hurt_system,
    hurtbox_system, patrol_system, physics_system, player_input_system, Death, DeathKind,
};

/// What happened during one tick that the host game needs to react to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    pub deaths: Vec<Death>,
    /// Every enemy the level started with is gone.
    pub level_cleared: bool,
}

/// Result of [`Simulation::advance`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Advance {
    pub reports: Vec<StepReport>,
    /// How far the leftover time reaches into the next tick, in `[0, 1)`.
    /// Used to interpolate rendered positions between ticks.
    pub alpha: f32,
}

/// One game session's world plus everything needed to step it.
///
/// Owns its entity store outright; nothing is shared between sessions.
pub struct Simulation {
    world: World,
    config: SimConfig,
    intent: ControlIntent,
    accumulator: f32,
    had_enemies: bool,
    tick: u64,
}

impl Simulation {
    /// Fails if `config` does not pass [`SimConfig::validate`]; the config
    /// is read-only afterwards.
    pub fn new(config: SimConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            world: World::new(),
            config,
            intent: ControlIntent::default(),
            accumulator: 0.0,
            had_enemies: false,
            tick: 0,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct access for entity/component CRUD between ticks.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of ticks run so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn spawn(&mut self, components: impl DynamicBundle) -> Entity {
        self.world.spawn(components)
    }

    /// Control intent used by every following tick until replaced.
    pub fn set_intent(&mut self, intent: ControlIntent) {
        self.intent = intent;
    }

    /// Run one tick of `dt` seconds.
    ///
    /// System order is fixed; later systems read what earlier ones wrote:
    ///
    /// 1. player input, hurtbox tracking, enemy patrols (controllers)
    /// 2. gravity
    /// 3. collision detection (swept contacts, then damage pairs)
    /// 4. physics resolution (moves boxes, sets `Grounded` / `CeilingBump`)
    /// 5. ceiling bump, then death
    ///
    /// A zero-length tick (`dt == 0.0`, e.g. while paused) integrates no
    /// motion but still runs damage pairing and the one-shot consumers.
    pub fn step(&mut self, dt: f32) -> StepReport {
        let dt = dt.max(0.0);
        let world = &mut self.world;

        if world.query::<&Patrol>().iter().next().is_some() {
            self.had_enemies = true;
        }

        player_input_system(world, &self.intent, &self.config, dt);
        hurtbox_system(world, dt);
        patrol_system(world, dt);

        gravity_system(world, &self.config.gravity, dt);

        let hurts = if dt > 0.0 {
            let hurts = collision_system(world);
            physics_system(world);
            hurts
        } else {
            hurt_system(world)
        };

        ceiling_bump_system(world);
        let deaths = death_system(world);

        let enemies = world.query::<&Patrol>().iter().count();
        let level_cleared = self.had_enemies && enemies == 0;
        if level_cleared && deaths.iter().any(|d| d.kind == DeathKind::Enemy) {
            debug!(tick = self.tick, "level cleared");
        }

        trace!(
            tick = self.tick,
            dt,
            hurts = hurts.len(),
            deaths = deaths.len(),
            "tick done"
        );
        self.tick += 1;

        StepReport { deaths, level_cleared }
    }

    /// Feed real elapsed time and run as many fixed ticks as it covers.
    ///
    /// Leftover time carries over to the next call. If more than
    /// `max_catchup_steps` ticks are owed, the surplus is dropped rather than
    /// letting the simulation fall further behind.
    pub fn advance(&mut self, frame_dt: f32) -> Advance {
        let fixed_dt = self.config.fixed_dt;
        self.accumulator += frame_dt.max(0.0);

        let mut reports = Vec::new();
        while self.accumulator >= fixed_dt {
            if reports.len() as u32 >= self.config.max_catchup_steps {
                let behind_ticks = (self.accumulator / fixed_dt) as u32;
                warn!("running too slow, skipping {behind_ticks} ticks");
                self.accumulator %= fixed_dt;
                break;
            }
            reports.push(self.step(fixed_dt));
            self.accumulator -= fixed_dt;
        }

        Advance {
            reports,
            alpha: self.accumulator / fixed_dt,
        }
    }
}
