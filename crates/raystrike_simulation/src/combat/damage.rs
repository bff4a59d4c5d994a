//! Damage application и removal

use bevy::prelude::*;

use crate::components::{DamageOutcome, Damageable, Health};
use crate::logger;

/// Запрос на урон (от attack_on_edge)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct DamageRequest {
    pub attacker: Entity,
    pub target: Entity,
    pub amount: f32,
}

/// Событие: урон нанесён
///
/// Используется для UI, звуков, эффектов.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct DamageDealt {
    pub attacker: Entity,
    pub target: Entity,
    pub amount: f32,
    pub remaining: f32,
    pub target_removed: bool,
}

/// Removal request: цель пересекла порог. Ровно одно событие на entity.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct EntityRemoved {
    pub entity: Entity,
    pub killer: Option<Entity>,
}

/// Система: применяем DamageRequest к Health
pub fn apply_damage(
    mut requests: EventReader<DamageRequest>,
    mut targets: Query<&mut Health>,
    mut damage_dealt: EventWriter<DamageDealt>,
    mut removed: EventWriter<EntityRemoved>,
) {
    for request in requests.read() {
        let Ok(mut health) = targets.get_mut(request.target) else {
            // Цель исчезла между raycast и применением
            continue;
        };

        let (remaining, target_removed) = match health.apply_damage(request.amount) {
            DamageOutcome::Absorbed { remaining } => (remaining, false),
            DamageOutcome::Removed { remaining } => (remaining, true),
            DamageOutcome::Ignored => {
                logger::log(&format!(
                    "Damage to already removed {:?} ignored",
                    request.target
                ));
                continue;
            }
        };

        damage_dealt.write(DamageDealt {
            attacker: request.attacker,
            target: request.target,
            amount: request.amount,
            remaining,
            target_removed,
        });

        if target_removed {
            removed.write(EntityRemoved {
                entity: request.target,
                killer: Some(request.attacker),
            });

            logger::log_info(&format!(
                "Entity {:?} removed by {:?}",
                request.target, request.attacker
            ));
        }
    }
}

/// Host side: removal request → despawn
pub fn despawn_removed(mut commands: Commands, mut removed: EventReader<EntityRemoved>) {
    for event in removed.read() {
        if let Ok(mut entity_commands) = commands.get_entity(event.entity) {
            entity_commands.despawn();
        }
    }
}
