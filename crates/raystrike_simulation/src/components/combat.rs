//! Боевые компоненты: Attacker

use bevy::prelude::*;

/// Контроллер атаки актора
///
/// Урон фиксированный: одно попадание на один attack edge.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Attacker {
    pub damage: f32,
}

impl Default for Attacker {
    fn default() -> Self {
        Self { damage: 10.0 }
    }
}
