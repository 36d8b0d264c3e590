use glam::Vec2;
use hecs::{Entity, World};

use crate::components::*;
use crate::config::PlayerConfig;
use crate::geometry::GeometryError;

/// Controllable player: gravity, swept collision, attacks.
pub fn spawn_player(
    world: &mut World,
    position: Vec2,
    dimension: Vec2,
) -> Result<Entity, GeometryError> {
    Ok(world.spawn((
        Aabb::new(position, dimension)?,
        Velocity(Vec2::ZERO),
        Gravity::default(),
        ActiveCollider,
        Controllable,
        PlayerState::default(),
        Facing::default(),
        Team::Player,
    )))
}

/// Patrolling enemy that hurts the player on touch.
/// `direction` is the outbound motion per second.
pub fn spawn_enemy(
    world: &mut World,
    position: Vec2,
    dimension: Vec2,
    direction: Vec2,
    mirror_time: f32,
    mirror_axis: Vec2,
) -> Result<Entity, GeometryError> {
    Ok(world.spawn((
        Aabb::new(position, dimension)?,
        ActiveCollider,
        Hurt,
        Team::Hostile,
        Patrol { direction, mirror_time, mirror_axis },
        PatrolFsm::new(PatrolLeg::Outbound),
        Facing::default(),
    )))
}

/// Solid level geometry.
pub fn spawn_platform(
    world: &mut World,
    position: Vec2,
    dimension: Vec2,
) -> Result<Entity, GeometryError> {
    Ok(world.spawn((Aabb::new(position, dimension)?, PassiveCollider)))
}

/// Invisible kill zone (pits, spikes). Spares hostile entities and cannot
/// itself be destroyed.
pub fn spawn_death_box(
    world: &mut World,
    position: Vec2,
    dimension: Vec2,
) -> Result<Entity, GeometryError> {
    Ok(world.spawn((
        Aabb::new(position, dimension)?,
        ActiveCollider,
        Hurt,
        Invincible,
        Team::Hostile,
    )))
}

/// Attack hurtbox owned by `host`. Placed next to the host on its first
/// hurtbox tick; takes the host's team so it cannot hit allies.
pub fn spawn_hurtbox(
    world: &mut World,
    host: Entity,
    config: &PlayerConfig,
) -> Result<Entity, GeometryError> {
    let anchor = world
        .get::<&Aabb>(host)
        .map(|b| b.position)
        .unwrap_or(Vec2::ZERO);
    let team = world.get::<&Team>(host).map(|t| *t).unwrap_or(Team::Player);

    Ok(world.spawn((
        Aabb::new(anchor, Vec2::splat(config.hurtbox_size))?,
        ActiveCollider,
        Hurt,
        Invincible,
        team,
        DisjointedHurtbox {
            remaining: config.hurtbox_lifetime,
            host,
        },
    )))
}
