//! Scripted headless сценарий
//!
//! Игрок в центре, враги по кольцу (позиции из seeded RNG). Вместо мыши —
//! `ScriptedAttacker`: каждые N кадров наводит курсор на ближайшего живого
//! врага и жмёт attack.

use bevy::prelude::*;
use rand::Rng;

use crate::components::{Attacker, Enemy, Health, Player};
use crate::config::SimulationConfig;
use crate::input::{InputEvent, ScreenProjection};
use crate::physics::circle_body;
use crate::{logger, DeterministicRng, FrameSet};

/// Scenario Plugin: scripted input до sampling'а
///
/// Драйвер активен только когда есть `ScriptedAttacker` (его ставит `spawn_scenario`).
pub struct ScenarioPlugin;

impl Plugin for ScenarioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PreUpdate,
            drive_scripted_attacks
                .before(FrameSet::Sample)
                .run_if(resource_exists::<ScriptedAttacker>),
        );
    }
}

/// Bundle игрока
pub fn player_bundle(position: Vec2, config: &SimulationConfig) -> impl Bundle {
    (
        Player,
        Attacker {
            damage: config.combat.attack_damage,
        },
        Transform::from_translation(position.extend(0.0)),
    )
}

/// Bundle врага
pub fn enemy_bundle(position: Vec2, config: &SimulationConfig) -> impl Bundle {
    (
        Enemy,
        Health::new(config.enemy.health),
        circle_body(config.enemy.radius),
        Transform::from_translation(position.extend(0.0)),
    )
}

/// Позиции врагов: кольцо вокруг центра, угол и дистанция с jitter из RNG
pub fn enemy_ring_positions(rng: &mut DeterministicRng, count: usize, radius: f32) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let base = i as f32 / count.max(1) as f32 * std::f32::consts::TAU;
            let angle = base + rng.rng.gen_range(-0.2..0.2);
            let distance = radius * rng.rng.gen_range(0.6..1.0);
            Vec2::from_angle(angle) * distance
        })
        .collect()
}

/// Spawn полной сцены сценария, возвращает игрока
pub fn spawn_scenario(world: &mut World) -> Entity {
    let config = world.resource::<SimulationConfig>().clone();

    let player = world.spawn(player_bundle(Vec2::ZERO, &config)).id();

    let positions = {
        let mut rng = world.resource_mut::<DeterministicRng>();
        enemy_ring_positions(
            &mut rng,
            config.scenario.enemy_count,
            config.scenario.spawn_radius,
        )
    };

    for position in positions {
        world.spawn(enemy_bundle(position, &config));
    }

    world.insert_resource(ScriptedAttacker::new(config.scenario.attack_interval));

    player
}

/// Скрипт вместо мыши
#[derive(Resource, Debug, Clone)]
pub struct ScriptedAttacker {
    /// Атака каждые `interval` кадров (0 = никогда)
    pub interval: u32,
    pub frame: u32,
    pub attacks_issued: u32,
}

impl ScriptedAttacker {
    pub fn new(interval: u32) -> Self {
        Self {
            interval,
            frame: 0,
            attacks_issued: 0,
        }
    }
}

/// Система: генерирует InputEvent'ы (PreUpdate, до dispatch)
pub fn drive_scripted_attacks(
    mut script: ResMut<ScriptedAttacker>,
    players: Query<&Transform, With<Player>>,
    enemies: Query<(Entity, &Transform, &Health), With<Enemy>>,
    projection: Res<ScreenProjection>,
    mut input: EventWriter<InputEvent>,
) {
    script.frame += 1;
    if script.interval == 0 || script.frame % script.interval != 0 {
        return;
    }

    let player = match players.single() {
        Ok(player) => player,
        Err(err) => {
            logger::log_error(&format!("drive_scripted_attacks: player не найден ({})", err));
            return;
        }
    };
    let origin = player.translation.truncate();

    // Ближайший живой враг; при равенстве — меньший index (детерминизм)
    let target = enemies
        .iter()
        .filter(|(_, _, health)| health.is_alive())
        .map(|(entity, transform, _)| {
            let position = transform.translation.truncate();
            (entity, position, position.distance_squared(origin))
        })
        .min_by(|a, b| {
            a.2.total_cmp(&b.2)
                .then_with(|| a.0.index().cmp(&b.0.index()))
        });

    let Some((_, position, _)) = target else {
        return;
    };

    input.write(InputEvent::PointerMoved(projection.world_to_screen(position)));
    input.write(InputEvent::TriggerPerformed);
    script.attacks_issued += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_positions_deterministic() {
        let a = enemy_ring_positions(&mut DeterministicRng::new(7), 6, 5.0);
        let b = enemy_ring_positions(&mut DeterministicRng::new(7), 6, 5.0);
        assert_eq!(a, b);
        assert_eq!(a.len(), 6);

        for position in a {
            let distance = position.length();
            assert!(distance >= 3.0 - 1e-4 && distance <= 5.0 + 1e-4, "distance = {}", distance);
        }
    }

    #[test]
    fn test_ring_positions_empty() {
        assert!(enemy_ring_positions(&mut DeterministicRng::new(1), 0, 5.0).is_empty());
    }
}
