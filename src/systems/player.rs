use glam::Vec2;
use hecs::{Entity, World};
use tracing::{debug, warn};

use crate::components::{
    Aabb, CeilingBump, Controllable, DisjointedHurtbox, Facing, Gravity, Grounded, PlayerState,
    Velocity,
};
use crate::config::SimConfig;
use crate::geometry::VELOCITY_EPSILON;
use crate::input::ControlIntent;
use crate::scene::prefabs::spawn_hurtbox;

/// Turn the control intent into velocity for every controllable entity.
///
/// - Horizontal velocity is set outright from the move direction.
/// - A fresh jump press while grounded launches; releasing jump while still
///   rising raises `CeilingBump`, which cuts the jump short.
/// - A fresh attack press spawns a disjointed hurtbox unless one is already out.
///
/// Runs first in the tick, so `Grounded` reflects the previous tick's contacts.
pub fn player_input_system(
    world: &mut World,
    intent: &ControlIntent,
    config: &SimConfig,
    dt: f32,
) {
    let mut lift_offs = Vec::new();
    let mut jump_cuts = Vec::new();
    let mut attackers = Vec::new();

    for (entity, (state, facing, vel, gravity, grounded, _)) in world.query_mut::<(
        &mut PlayerState,
        &mut Facing,
        &mut Velocity,
        &Gravity,
        Option<&Grounded>,
        &Controllable,
    )>() {
        let vel_h = intent.move_direction * config.player.speed * dt;
        if vel_h.abs() > VELOCITY_EPSILON {
            facing.right = vel_h > 0.0;
        }

        let mut vel_v = vel.0.y;
        if !state.jump_held && intent.jump && grounded.is_some() {
            vel_v = -config.player.jump_multiplier * gravity.force * config.gravity.unit_scale;
            state.jump_held = true;
            lift_offs.push(entity);
        } else if state.jump_held && !intent.jump {
            if vel_v < 0.0 {
                jump_cuts.push(entity);
            }
            state.jump_held = false;
        }

        vel.0 = Vec2::new(vel_h, vel_v);

        if !intent.attack {
            state.attack_held = false;
        } else if !state.has_hurtbox && !state.attack_held {
            state.has_hurtbox = true;
            state.attack_held = true;
            attackers.push(entity);
        }
    }

    for entity in lift_offs {
        let _ = world.remove_one::<Grounded>(entity);
    }
    for entity in jump_cuts {
        let _ = world.insert_one(entity, CeilingBump);
    }
    for host in attackers {
        if let Err(e) = spawn_hurtbox(world, host, &config.player) {
            warn!(%e, ?host, "could not spawn hurtbox");
            if let Ok(mut state) = world.get::<&mut PlayerState>(host) {
                state.has_hurtbox = false;
            }
        }
    }
}

/// Keep each disjointed hurtbox glued to the side its host faces, and
/// expire it when its lifetime runs out.
///
/// A hurtbox whose host is gone, or lost its box or facing, is despawned
/// on the spot.
pub fn hurtbox_system(world: &mut World, dt: f32) {
    let hurtboxes: Vec<(Entity, Entity)> = world
        .query::<&DisjointedHurtbox>()
        .with::<&Aabb>()
        .iter()
        .map(|(entity, hurtbox)| (entity, hurtbox.host))
        .collect();

    for (entity, host) in hurtboxes {
        let anchor = match (world.get::<&Aabb>(host), world.get::<&Facing>(host)) {
            (Ok(host_box), Ok(facing)) => Some((*host_box, facing.right)),
            _ => None,
        };
        let Some((host_box, face_right)) = anchor else {
            debug!(?entity, ?host, "hurtbox lost its host");
            let _ = world.despawn(entity);
            continue;
        };

        let mut expired = false;
        if let Ok((aabb, hurtbox)) =
            world.query_one_mut::<(&mut Aabb, &mut DisjointedHurtbox)>(entity)
        {
            aabb.position = if face_right {
                Vec2::new(host_box.right(), host_box.top())
            } else {
                Vec2::new(host_box.left() - aabb.dimension().x, host_box.top())
            };

            hurtbox.remaining -= dt;
            expired = hurtbox.remaining < 0.0;
        }

        if expired {
            debug!(?entity, ?host, "hurtbox expired");
            let _ = world.despawn(entity);
            if let Ok(mut state) = world.get::<&mut PlayerState>(host) {
                state.has_hurtbox = false;
            }
        }
    }
}
