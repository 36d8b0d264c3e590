use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{Aabb, CeilingBump, Collision, Grounded, Velocity};
use crate::geometry::VELOCITY_EPSILON;

/// Outcome of resolving one entity's contact, applied after the query ends.
enum Contact {
    Floor,
    Ceiling,
    Other,
}

fn classify(normal: Vec2) -> Contact {
    if normal.x.abs() >= VELOCITY_EPSILON {
        Contact::Other
    } else if normal.y < -VELOCITY_EPSILON {
        Contact::Floor
    } else if normal.y > VELOCITY_EPSILON {
        Contact::Ceiling
    } else {
        Contact::Other
    }
}

/// Move every entity with a box and a velocity by exactly one tick.
///
/// Entities with a `Collision` advance to the contact point, then slide the
/// remaining fraction of the tick along the contact surface. The
/// `Collision` is consumed. `Grounded` is rebuilt from this tick's contacts,
/// and ceiling contacts raise `CeilingBump`.
pub fn physics_system(world: &mut World) {
    // Ground contact from the previous tick is stale now; rebuilt below.
    let stale: Vec<Entity> = world
        .query::<()>()
        .with::<(&Grounded, &Aabb, &Velocity)>()
        .iter()
        .map(|(entity, ())| entity)
        .collect();
    for entity in stale {
        let _ = world.remove_one::<Grounded>(entity);
    }

    let mut contacts: Vec<(Entity, Contact)> = Vec::new();

    for (entity, (aabb, vel, collision)) in
        world.query_mut::<(&mut Aabb, &Velocity, Option<&Collision>)>()
    {
        let Some(collision) = collision else {
            aabb.position += vel.0;
            continue;
        };

        aabb.position += vel.0 * collision.time;

        if collision.time < 1.0 {
            // Surface direction: the normal with its axes swapped.
            let surface = Vec2::new(collision.normal.y, collision.normal.x);
            let slide = vel.0.dot(surface) * (1.0 - collision.time);
            aabb.position += surface * slide;
        }

        contacts.push((entity, classify(collision.normal)));
    }

    for (entity, contact) in contacts {
        let _ = world.remove_one::<Collision>(entity);
        match contact {
            Contact::Floor => {
                let _ = world.insert_one(entity, Grounded);
            }
            Contact::Ceiling => {
                let _ = world.insert_one(entity, CeilingBump);
            }
            Contact::Other => {}
        }
    }
}

/// Kill upward momentum for entities that bumped a ceiling (or released a
/// jump early). Consumes the `CeilingBump` marker.
pub fn ceiling_bump_system(world: &mut World) {
    let mut bumped = Vec::new();
    for (entity, (vel, _bump)) in world.query_mut::<(&mut Velocity, &CeilingBump)>() {
        vel.0.y = 0.0;
        bumped.push(entity);
    }
    for entity in bumped {
        let _ = world.remove_one::<CeilingBump>(entity);
    }
}
