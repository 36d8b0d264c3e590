use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{
    Aabb, ActiveCollider, Collision, DisjointedHurtbox, Hurt, MarkOfDeath, PassiveCollider, Team,
    Velocity,
};
use crate::geometry::{swept, Sweep};

/// Damage contact produced by the hurt pairing pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HurtEvent {
    pub victim: Entity,
    pub source: Entity,
}

struct HurtEntry {
    entity: Entity,
    aabb: Aabb,
    hurts: bool,
    team: Option<Team>,
    host: Option<Entity>,
}

/// Whether `source` damages `victim`, given their boxes already overlap.
fn damages(source: &HurtEntry, victim: &HurtEntry) -> bool {
    if !source.hurts {
        return false;
    }
    if let (Some(a), Some(b)) = (source.team, victim.team) {
        if a == b {
            return false;
        }
    }
    // An attack never hits the entity swinging it, nor the other way round.
    source.host != Some(victim.entity) && victim.host != Some(source.entity)
}

/// Keep the earlier of two contacts. At equal times, a real contact beats
/// an all-clear so floor contact at the very end of a tick is not lost.
fn earliest(best: Option<Sweep>, candidate: Sweep) -> Option<Sweep> {
    match best {
        None => Some(candidate),
        Some(current) => {
            let earlier = candidate.time < current.time;
            let same_time_with_normal =
                candidate.time == current.time && !current.is_contact() && candidate.is_contact();
            if earlier || same_time_with_normal {
                Some(candidate)
            } else {
                Some(current)
            }
        }
    }
}

/// Broad + narrow phase for every moving active collider.
///
/// Each mover is swept against all passive colliders its broad box touches,
/// and the earliest contact replaces its `Collision`. Movers whose broad box
/// touches nothing are left without one and move freely.
pub fn sweep_system(world: &mut World) {
    let passives: Vec<(Entity, Aabb)> = world
        .query::<&Aabb>()
        .with::<&PassiveCollider>()
        .iter()
        .map(|(entity, aabb)| (entity, *aabb))
        .collect();

    let movers: Vec<(Entity, Aabb, Vec2)> = world
        .query::<(&Aabb, &Velocity)>()
        .with::<&ActiveCollider>()
        .iter()
        .map(|(entity, (aabb, vel))| (entity, *aabb, vel.0))
        .collect();

    for (entity, aabb, vel) in movers {
        let broad = aabb.broad_box(vel);

        let best = passives
            .iter()
            .filter(|(passive, passive_aabb)| *passive != entity && broad.overlaps(passive_aabb))
            .map(|(_, passive_aabb)| swept(&aabb, passive_aabb, vel))
            .fold(None, earliest);

        if let Some(sweep) = best {
            // insert_one replaces last tick's result if the physics step missed it.
            let _ = world.insert_one(entity, Collision::from(sweep));
        }
    }
}

/// Pair every two overlapping active colliders and mark whichever side is
/// damaged by the other. Both directions of each pair are checked.
pub fn hurt_system(world: &mut World) -> Vec<HurtEvent> {
    let entries: Vec<HurtEntry> = world
        .query::<(
            &Aabb,
            Option<&Hurt>,
            Option<&Team>,
            Option<&DisjointedHurtbox>,
        )>()
        .with::<&ActiveCollider>()
        .iter()
        .map(|(entity, (aabb, hurt, team, hurtbox))| HurtEntry {
            entity,
            aabb: *aabb,
            hurts: hurt.is_some(),
            team: team.copied(),
            host: hurtbox.map(|h| h.host),
        })
        .collect();

    // Brute force O(n²); active counts stay small in a platformer level.
    let mut events = Vec::new();
    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            let (a, b) = (&entries[i], &entries[j]);
            if !a.aabb.overlaps(&b.aabb) {
                continue;
            }
            if damages(b, a) {
                events.push(HurtEvent { victim: a.entity, source: b.entity });
            }
            if damages(a, b) {
                events.push(HurtEvent { victim: b.entity, source: a.entity });
            }
        }
    }

    for event in &events {
        let _ = world.insert_one(event.victim, MarkOfDeath);
    }

    events
}

/// Full collision processor: swept contacts for movers, then damage pairs.
pub fn collision_system(world: &mut World) -> Vec<HurtEvent> {
    sweep_system(world);
    hurt_system(world)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aabb(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(w, h)).unwrap()
    }

    fn spawn_mover(world: &mut World, b: Aabb, vel: Vec2) -> Entity {
        world.spawn((b, Velocity(vel), ActiveCollider))
    }

    fn spawn_wall(world: &mut World, b: Aabb) -> Entity {
        world.spawn((b, PassiveCollider))
    }

    fn collision_of(world: &World, entity: Entity) -> Collision {
        *world.get::<&Collision>(entity).unwrap()
    }

    #[test]
    fn test_keeps_minimum_time_whatever_the_order() {
        // Near floor at t=0.25, far floor at t=0.75; spawn order swapped between runs.
        for near_first in [true, false] {
            let mut world = World::new();
            let body = spawn_mover(&mut world, aabb(0.0, 0.0, 1.0, 1.0), Vec2::new(0.0, 4.0));
            let near = aabb(-1.0, 2.0, 3.0, 1.0);
            let far = aabb(-1.0, 4.0, 3.0, 1.0);
            if near_first {
                spawn_wall(&mut world, near);
                spawn_wall(&mut world, far);
            } else {
                spawn_wall(&mut world, far);
                spawn_wall(&mut world, near);
            }

            sweep_system(&mut world);

            let hit = collision_of(&world, body);
            assert!((hit.time - 0.25).abs() < 1e-6, "near_first={near_first}: {hit:?}");
            assert_eq!(hit.normal, Vec2::new(0.0, -1.0));
        }
    }

    #[test]
    fn test_broad_phase_miss_leaves_no_collision() {
        let mut world = World::new();
        let body = spawn_mover(&mut world, aabb(0.0, 0.0, 1.0, 1.0), Vec2::new(0.5, 0.0));
        spawn_wall(&mut world, aabb(10.0, 10.0, 1.0, 1.0));

        sweep_system(&mut world);

        assert!(world.get::<&Collision>(body).is_err());
    }

    #[test]
    fn test_broad_hit_without_contact_defaults_to_clear() {
        let mut world = World::new();
        // Moving up and away from a floor it is resting on.
        let body = spawn_mover(&mut world, aabb(0.0, 1.0, 1.0, 1.0), Vec2::new(0.0, -0.5));
        spawn_wall(&mut world, aabb(-5.0, 2.0, 10.0, 1.0));

        sweep_system(&mut world);

        assert_eq!(collision_of(&world, body), Collision { time: 1.0, normal: Vec2::ZERO });
    }

    #[test]
    fn test_contact_beats_clear_at_equal_time() {
        let clear = Sweep::MISS;
        let touch = Sweep { time: 1.0, normal: Vec2::new(0.0, -1.0) };

        assert_eq!(earliest(Some(clear), touch), Some(touch));
        assert_eq!(earliest(Some(touch), clear), Some(touch));
    }

    #[test]
    fn test_movers_without_velocity_are_not_swept() {
        let mut world = World::new();
        let still = world.spawn((aabb(0.0, 0.0, 1.0, 1.0), ActiveCollider));
        spawn_wall(&mut world, aabb(0.0, 1.0, 1.0, 1.0));

        sweep_system(&mut world);

        assert!(world.get::<&Collision>(still).is_err());
    }

    #[test]
    fn test_hurt_marks_victim_in_either_spawn_order() {
        for hurt_first in [true, false] {
            let mut world = World::new();
            let spawn_enemy = |world: &mut World| {
                world.spawn((aabb(0.5, 0.0, 1.0, 1.0), ActiveCollider, Hurt, Team::Hostile))
            };
            let spawn_player = |world: &mut World| {
                world.spawn((aabb(0.0, 0.0, 1.0, 1.0), ActiveCollider, Team::Player))
            };
            let (enemy, player) = if hurt_first {
                let e = spawn_enemy(&mut world);
                (e, spawn_player(&mut world))
            } else {
                let p = spawn_player(&mut world);
                (spawn_enemy(&mut world), p)
            };

            let events = hurt_system(&mut world);

            assert_eq!(events, vec![HurtEvent { victim: player, source: enemy }]);
            assert!(world.get::<&MarkOfDeath>(player).is_ok());
            assert!(world.get::<&MarkOfDeath>(enemy).is_err());
        }
    }

    #[test]
    fn test_mutual_damage() {
        let mut world = World::new();
        let a = world.spawn((aabb(0.0, 0.0, 1.0, 1.0), ActiveCollider, Hurt, Team::Player));
        let b = world.spawn((aabb(0.5, 0.5, 1.0, 1.0), ActiveCollider, Hurt, Team::Hostile));

        let events = hurt_system(&mut world);

        assert_eq!(events.len(), 2);
        assert!(world.get::<&MarkOfDeath>(a).is_ok());
        assert!(world.get::<&MarkOfDeath>(b).is_ok());
    }

    #[test]
    fn test_same_team_and_host_are_spared() {
        let mut world = World::new();
        let enemy_a = world.spawn((aabb(0.0, 0.0, 1.0, 1.0), ActiveCollider, Hurt, Team::Hostile));
        let enemy_b = world.spawn((aabb(0.5, 0.0, 1.0, 1.0), ActiveCollider, Hurt, Team::Hostile));

        let host = world.spawn((aabb(5.0, 0.0, 1.0, 1.0), ActiveCollider));
        let attack = world.spawn((
            aabb(6.0, 0.0, 0.5, 0.5),
            ActiveCollider,
            Hurt,
            DisjointedHurtbox { remaining: 1.0, host },
        ));

        let events = hurt_system(&mut world);

        assert!(events.is_empty());
        for entity in [enemy_a, enemy_b, host, attack] {
            assert!(world.get::<&MarkOfDeath>(entity).is_err());
        }
    }

    #[test]
    fn test_teamless_entities_take_damage() {
        let mut world = World::new();
        let crate_box = world.spawn((aabb(0.0, 0.0, 1.0, 1.0), ActiveCollider));
        world.spawn((aabb(0.0, 1.0, 1.0, 1.0), ActiveCollider, Hurt, Team::Hostile));

        hurt_system(&mut world);

        assert!(world.get::<&MarkOfDeath>(crate_box).is_ok());
    }

    #[test]
    fn test_passives_never_hurt() {
        let mut world = World::new();
        let body = world.spawn((aabb(0.0, 0.0, 1.0, 1.0), ActiveCollider));
        world.spawn((aabb(0.0, 0.0, 1.0, 1.0), PassiveCollider, Hurt));

        assert!(hurt_system(&mut world).is_empty());
        assert!(world.get::<&MarkOfDeath>(body).is_err());
    }
}
