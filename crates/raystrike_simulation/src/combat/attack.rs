//! Actor Controller: attack edge → raycast → DamageRequest

use avian2d::prelude::{Position, SpatialQuery};
use bevy::prelude::*;

use crate::combat::damage::DamageRequest;
use crate::components::{Attacker, Health};
use crate::config::SimulationConfig;
use crate::input::{InputSampler, ScreenProjection};
use crate::logger;
use crate::physics::cast_attack_ray;

/// Чем закончилась атака на этом кадре
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttackOutcome {
    /// Курсор ровно на акторе — направление не определено, луч не пускаем
    Skipped,
    /// Луч ни во что не попал
    Missed,
    /// Попали в entity без Health
    NotDamageable(Entity),
    /// Попали в damageable цель, DamageRequest отправлен
    Hit(Entity),
}

/// Событие: attack edge обработан (для рендера луча и тестов)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct AttackResolved {
    pub attacker: Entity,
    pub origin: Vec2,
    pub direction: Option<Vec2>,
    /// Точка попадания (если было)
    pub impact: Option<Vec2>,
    pub outcome: AttackOutcome,
}

/// Система: на attack edge пускаем один луч в сторону курсора
///
/// 1. Читаем edge (не сбрасываем — это делает `clear_attack_edges` в Last)
/// 2. direction = normalize(курсор_world - позиция актора). Позиция берётся из
///    physics `Position` (world space, тот же, в котором строится spatial query),
///    а не из локального `Transform`.
/// 3. Ближайший коллайдер, кроме самого актора
/// 4. Если у цели есть Health → DamageRequest (один на edge)
pub fn attack_on_edge(
    attackers: Query<(Entity, &Position, &InputSampler, &Attacker)>,
    damageables: Query<(), With<Health>>,
    spatial: SpatialQuery,
    projection: Res<ScreenProjection>,
    config: Res<SimulationConfig>,
    mut damage_requests: EventWriter<DamageRequest>,
    mut resolved: EventWriter<AttackResolved>,
) {
    let max_distance = config.combat.ray_length();

    for (entity, position, sampler, attacker) in attackers.iter() {
        if !sampler.attack_requested() {
            continue;
        }

        let origin = position.0;

        let Some(direction) = sampler
            .aim_direction(&projection, origin)
            .and_then(|direction| Dir2::new(direction).ok())
        else {
            logger::log(&format!("Attack skipped: {:?} pointer at actor position", entity));
            resolved.write(AttackResolved {
                attacker: entity,
                origin,
                direction: None,
                impact: None,
                outcome: AttackOutcome::Skipped,
            });
            continue;
        };

        let hit = cast_attack_ray(&spatial, origin, direction, max_distance, entity);

        let outcome = match hit {
            None => AttackOutcome::Missed,
            Some(hit) if damageables.contains(hit.entity) => {
                damage_requests.write(DamageRequest {
                    attacker: entity,
                    target: hit.entity,
                    amount: attacker.damage,
                });
                AttackOutcome::Hit(hit.entity)
            }
            Some(hit) => AttackOutcome::NotDamageable(hit.entity),
        };

        logger::log(&format!("Attack {:?} dir={:?} → {:?}", entity, direction, outcome));

        resolved.write(AttackResolved {
            attacker: entity,
            origin,
            direction: Some(*direction),
            impact: hit.map(|hit| hit.point),
            outcome,
        });
    }
}
