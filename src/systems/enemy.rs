use hecs::World;

use crate::components::{Aabb, Facing, Patrol, PatrolFsm, PatrolLeg};
use crate::geometry::VELOCITY_EPSILON;

/// Move patrolling enemies along their route.
///
/// Enemies are kinematic: they move their box directly instead of going
/// through the swept collision pass. Each leg lasts `mirror_time` seconds;
/// the return leg reverses the axes selected by `mirror_axis`.
pub fn patrol_system(world: &mut World, dt: f32) {
    for (_entity, (aabb, patrol, fsm, facing)) in
        world.query_mut::<(&mut Aabb, &Patrol, &mut PatrolFsm, Option<&mut Facing>)>()
    {
        let step = patrol.direction * dt;
        let motion = match fsm.state {
            PatrolLeg::Outbound => step,
            PatrolLeg::Return => -patrol.mirror_axis * step,
        };
        aabb.position += motion;

        if let Some(facing) = facing {
            if motion.x.abs() > VELOCITY_EPSILON {
                facing.right = motion.x > 0.0;
            }
        }

        fsm.tick(dt);
        if fsm.elapsed > patrol.mirror_time {
            let next = fsm.state.flipped();
            fsm.go(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn spawn_walker(world: &mut World, direction: Vec2, mirror_axis: Vec2) -> hecs::Entity {
        world.spawn((
            Aabb::new(Vec2::ZERO, Vec2::ONE).unwrap(),
            Patrol { direction, mirror_time: 1.0, mirror_axis },
            PatrolFsm::new(PatrolLeg::Outbound),
            Facing::default(),
        ))
    }

    fn position(world: &World, entity: hecs::Entity) -> Vec2 {
        world.get::<&Aabb>(entity).unwrap().position
    }

    #[test]
    fn test_walks_out_and_back() {
        let mut world = World::new();
        let walker = spawn_walker(&mut world, Vec2::new(1.0, 0.0), Vec2::new(1.0, 0.0));

        for _ in 0..3 {
            patrol_system(&mut world, 0.5);
        }
        // Third half-second pushes the leg past mirror_time.
        assert!(position(&world, walker).abs_diff_eq(Vec2::new(1.5, 0.0), 1e-6));
        assert_eq!(world.get::<&PatrolFsm>(walker).unwrap().state, PatrolLeg::Return);
        assert!(world.get::<&Facing>(walker).unwrap().right);

        patrol_system(&mut world, 0.5);
        assert!(position(&world, walker).abs_diff_eq(Vec2::new(1.0, 0.0), 1e-6));
        assert!(!world.get::<&Facing>(walker).unwrap().right);
    }

    #[test]
    fn test_unmirrored_axis_is_frozen_on_return() {
        let mut world = World::new();
        let walker = spawn_walker(&mut world, Vec2::new(1.0, 2.0), Vec2::new(0.0, 1.0));
        world.get::<&mut PatrolFsm>(walker).unwrap().state = PatrolLeg::Return;

        patrol_system(&mut world, 0.5);

        assert!(position(&world, walker).abs_diff_eq(Vec2::new(0.0, -1.0), 1e-6));
    }

    #[test]
    fn test_zero_dt_holds_still() {
        let mut world = World::new();
        let walker = spawn_walker(&mut world, Vec2::new(1.0, 0.0), Vec2::new(1.0, 0.0));

        patrol_system(&mut world, 0.0);

        assert_eq!(position(&world, walker), Vec2::ZERO);
        assert_eq!(world.get::<&PatrolFsm>(walker).unwrap().state, PatrolLeg::Outbound);
    }
}
