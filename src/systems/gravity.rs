use hecs::World;

use crate::components::{Gravity, Velocity};
use crate::config::GravityConfig;

/// Accelerate every gravity-affected velocity downward, capped at terminal speed.
///
/// Only falling (positive y) speed is capped; a jump's upward velocity is
/// left alone.
pub fn gravity_system(world: &mut World, config: &GravityConfig, dt: f32) {
    for (_entity, (gravity, vel)) in world.query_mut::<(&Gravity, &mut Velocity)>() {
        let terminal = gravity.force * config.max_modifier * config.unit_scale;
        vel.0.y += gravity.force * config.compensator * dt * config.unit_scale;
        vel.0.y = vel.0.y.min(terminal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn falling_body(world: &mut World, vel: Vec2) -> hecs::Entity {
        world.spawn((Velocity(vel), Gravity::default()))
    }

    fn vel_y(world: &World, entity: hecs::Entity) -> f32 {
        world.get::<&Velocity>(entity).unwrap().0.y
    }

    #[test]
    fn test_zero_dt_is_stationary() {
        let mut world = World::new();
        let body = falling_body(&mut world, Vec2::ZERO);

        gravity_system(&mut world, &GravityConfig::default(), 0.0);

        assert_eq!(world.get::<&Velocity>(body).unwrap().0, Vec2::ZERO);
    }

    #[test]
    fn test_acceleration_then_terminal_speed() {
        let mut world = World::new();
        let body = falling_body(&mut world, Vec2::ZERO);
        let config = GravityConfig::default();

        gravity_system(&mut world, &config, 0.1);
        assert!((vel_y(&world, body) - 0.0326673).abs() < 1e-3);

        gravity_system(&mut world, &config, 0.2);
        assert!((vel_y(&world, body) - 0.04905).abs() < 1e-3);

        // Saturated: more time does not add speed.
        gravity_system(&mut world, &config, 0.5);
        assert!((vel_y(&world, body) - 0.04905).abs() < 1e-6);
    }

    #[test]
    fn test_upward_velocity_not_clamped() {
        let mut world = World::new();
        let body = falling_body(&mut world, Vec2::new(0.3, -1.0));

        gravity_system(&mut world, &GravityConfig::default(), 0.1);

        let vel = world.get::<&Velocity>(body).unwrap().0;
        assert_eq!(vel.x, 0.3);
        assert!(vel.y < -0.9 && vel.y > -1.0);
    }

    #[test]
    fn test_without_gravity_untouched() {
        let mut world = World::new();
        let body = world.spawn((Velocity(Vec2::new(0.0, 0.01)),));

        gravity_system(&mut world, &GravityConfig::default(), 1.0);

        assert_eq!(vel_y(&world, body), 0.01);
    }
}
