use hecs::{Entity, World};
use tracing::debug;

use crate::components::{Invincible, MarkOfDeath, PlayerState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathKind {
    Player,
    Enemy,
}

/// An entity removed by the death system this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Death {
    pub entity: Entity,
    pub kind: DeathKind,
}

/// Despawn everything marked for death, except invincible entities, which
/// only lose the mark. Returns the despawned entities so the caller can
/// react (respawn, score, sound).
pub fn death_system(world: &mut World) -> Vec<Death> {
    let marked: Vec<(Entity, bool, bool)> = world
        .query::<(Option<&Invincible>, Option<&PlayerState>)>()
        .with::<&MarkOfDeath>()
        .iter()
        .map(|(entity, (invincible, player))| (entity, invincible.is_some(), player.is_some()))
        .collect();

    let mut deaths = Vec::new();
    for (entity, invincible, is_player) in marked {
        if invincible {
            let _ = world.remove_one::<MarkOfDeath>(entity);
            continue;
        }

        let kind = if is_player { DeathKind::Player } else { DeathKind::Enemy };
        if world.despawn(entity).is_ok() {
            debug!(?entity, ?kind, "entity died");
            deaths.push(Death { entity, kind });
        }
    }
    deaths
}
