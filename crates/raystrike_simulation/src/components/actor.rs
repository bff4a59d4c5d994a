//! Базовые компоненты акторов: Player, Enemy, Health
//!
//! `Damageable` — capability "может получать урон". Вместо поиска компонента
//! по типу у произвольного объекта атакующий делает typed query по `Health`.

use avian2d::prelude::{Collider, RigidBody};
use bevy::prelude::*;

use crate::input::InputSampler;
use crate::physics::DEFAULT_ACTOR_RADIUS;

use super::combat::Attacker;

/// Игрок — актор, управляемый input'ом
///
/// Required Components: InputSampler (input state), Attacker (контроллер атаки),
/// static Collider (луч игрока исключает собственный коллайдер).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(
    InputSampler,
    Attacker,
    Collider = Collider::circle(DEFAULT_ACTOR_RADIUS),
    RigidBody = RigidBody::Static,
    Transform
)]
pub struct Player;

/// Враг — цель, которая умеет умирать
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(
    Health,
    Collider = Collider::circle(DEFAULT_ACTOR_RADIUS),
    RigidBody = RigidBody::Static,
    Transform
)]
pub struct Enemy;

/// Состояние жизни. Removed — терминальное.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum Vitality {
    #[default]
    Alive,
    Removed,
}

/// Результат одного `apply_damage`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DamageOutcome {
    /// Урон применён, цель жива
    Absorbed { remaining: f32 },
    /// Урон применён, цель пересекла порог — нужно удаление (ровно один раз)
    Removed { remaining: f32 },
    /// Цель уже удалена, ничего не изменилось
    Ignored,
}

/// Capability "получает урон и сигнализирует об удалении"
pub trait Damageable {
    /// Вычитает `amount` без валидации (отрицательный amount лечит).
    fn apply_damage(&mut self, amount: f32) -> DamageOutcome;

    fn is_removed(&self) -> bool;
}

/// Здоровье
///
/// Инвариант: переход Alive → Removed происходит ровно один раз,
/// когда current ≤ 0. Пишет сюда только `apply_damage`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: f32,
    pub max: f32,
    state: Vitality,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(30.0)
    }
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            max,
            state: Vitality::Alive,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.state == Vitality::Alive
    }

    pub fn fraction(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.current / self.max).clamp(0.0, 1.0)
    }
}

impl Damageable for Health {
    fn apply_damage(&mut self, amount: f32) -> DamageOutcome {
        if self.state == Vitality::Removed {
            return DamageOutcome::Ignored;
        }

        self.current -= amount;

        if self.current <= 0.0 {
            self.state = Vitality::Removed;
            DamageOutcome::Removed {
                remaining: self.current,
            }
        } else {
            DamageOutcome::Absorbed {
                remaining: self.current,
            }
        }
    }

    fn is_removed(&self) -> bool {
        self.state == Vitality::Removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_damage_then_removal() {
        let mut health = Health::new(15.0);

        let first = health.apply_damage(10.0);
        assert_eq!(first, DamageOutcome::Absorbed { remaining: 5.0 });
        assert_eq!(health.current, 5.0);
        assert!(health.is_alive());

        let second = health.apply_damage(10.0);
        assert!(matches!(second, DamageOutcome::Removed { .. }));
        assert!(health.current <= 0.0);
        assert!(health.is_removed());
    }

    #[test]
    fn test_exact_zero_removes() {
        let mut health = Health::new(10.0);
        assert_eq!(
            health.apply_damage(10.0),
            DamageOutcome::Removed { remaining: 0.0 }
        );
    }

    #[test]
    fn test_damage_after_removal_is_noop() {
        let mut health = Health::new(5.0);
        health.apply_damage(10.0);
        let snapshot = health;

        assert_eq!(health.apply_damage(10.0), DamageOutcome::Ignored);
        assert_eq!(health.apply_damage(-100.0), DamageOutcome::Ignored);
        assert_eq!(health, snapshot);
    }

    #[test]
    fn test_negative_damage_heals() {
        let mut health = Health::new(20.0);
        health.apply_damage(10.0);

        // amount не валидируется: отрицательный урон лечит (и может превысить max)
        assert_eq!(
            health.apply_damage(-15.0),
            DamageOutcome::Absorbed { remaining: 25.0 }
        );
        assert_eq!(health.fraction(), 1.0);
    }

    #[test]
    fn test_zero_max_health_fraction() {
        let health = Health::new(0.0);
        assert_eq!(health.fraction(), 0.0);
        // Health(0) ещё Alive до первого apply_damage
        assert!(health.is_alive());
    }
}
