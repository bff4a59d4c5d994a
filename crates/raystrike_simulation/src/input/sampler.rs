//! Input Sampler — one-frame attack edge + последняя позиция курсора
//!
//! Жизненный цикл одного кадра: set (dispatch) → consume (Update) → clear (Last).

use bevy::prelude::*;

use super::projection::ScreenProjection;

/// Input state актора
///
/// Потребители читают только через `attack_requested()` / `relative_pointer()`.
/// Пишут только setter'ы, которые вызывает dispatch система.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct InputSampler {
    attack_edge: bool,
    pointer_screen: Vec2,
    subscribed: bool,
}

impl InputSampler {
    /// Enable hook: подписка на input events.
    ///
    /// Не больше одного раза за жизнь актора — повторный вызов возвращает false.
    pub fn enable(&mut self) -> bool {
        if self.subscribed {
            return false;
        }
        self.subscribed = true;
        true
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Trigger performed. Несколько trigger'ов за кадр не накапливаются.
    pub fn trigger(&mut self) {
        self.attack_edge = true;
    }

    /// Pointer moved / canceled — перезаписываем payload'ом
    pub fn set_pointer(&mut self, screen: Vec2) {
        self.pointer_screen = screen;
    }

    /// Граница конца кадра
    pub fn end_frame(&mut self) {
        self.attack_edge = false;
    }

    pub fn attack_requested(&self) -> bool {
        self.attack_edge
    }

    pub fn pointer_screen(&self) -> Vec2 {
        self.pointer_screen
    }

    /// Вектор от актора к курсору в world space
    pub fn relative_pointer(&self, projection: &ScreenProjection, actor_position: Vec2) -> Vec2 {
        projection.screen_to_world(self.pointer_screen) - actor_position
    }

    /// Нормализованное направление атаки; None если курсор ровно на акторе
    pub fn aim_direction(
        &self,
        projection: &ScreenProjection,
        actor_position: Vec2,
    ) -> Option<Vec2> {
        self.relative_pointer(projection, actor_position)
            .try_normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_false_without_trigger() {
        let mut sampler = InputSampler::default();
        for _ in 0..3 {
            assert!(!sampler.attack_requested());
            sampler.end_frame();
        }
    }

    #[test]
    fn test_edge_single_frame() {
        let mut sampler = InputSampler::default();
        sampler.trigger();

        // Повторные чтения внутри кадра — одно и то же значение
        assert!(sampler.attack_requested());
        assert!(sampler.attack_requested());

        sampler.end_frame();
        assert!(!sampler.attack_requested());
    }

    #[test]
    fn test_multiple_triggers_idempotent() {
        let mut sampler = InputSampler::default();
        sampler.trigger();
        sampler.trigger();
        sampler.trigger();
        assert!(sampler.attack_requested());

        // Одна граница кадра сбрасывает всё — счётчика нет
        sampler.end_frame();
        assert!(!sampler.attack_requested());
    }

    #[test]
    fn test_enable_only_once() {
        let mut sampler = InputSampler::default();
        assert!(!sampler.is_subscribed());
        assert!(sampler.enable());
        assert!(!sampler.enable());
        assert!(sampler.is_subscribed());
    }

    #[test]
    fn test_pointer_defaults_to_zero() {
        let sampler = InputSampler::default();
        assert_eq!(sampler.pointer_screen(), Vec2::ZERO);
    }

    #[test]
    fn test_relative_pointer_and_direction() {
        let mut sampler = InputSampler::default();
        sampler.set_pointer(Vec2::new(5.0, 3.0));

        let actor = Vec2::new(2.0, 3.0);
        let projection = ScreenProjection::Identity;

        assert_eq!(sampler.relative_pointer(&projection, actor), Vec2::new(3.0, 0.0));
        assert_eq!(sampler.aim_direction(&projection, actor), Some(Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn test_pointer_on_actor_has_no_direction() {
        let mut sampler = InputSampler::default();
        sampler.set_pointer(Vec2::new(2.0, 3.0));

        assert_eq!(
            sampler.aim_direction(&ScreenProjection::Identity, Vec2::new(2.0, 3.0)),
            None
        );
    }

    #[test]
    fn test_pointer_overwritten_by_latest_event() {
        let mut sampler = InputSampler::default();
        sampler.set_pointer(Vec2::new(1.0, 1.0));
        sampler.set_pointer(Vec2::new(-4.0, 2.0));
        assert_eq!(sampler.pointer_screen(), Vec2::new(-4.0, 2.0));
    }
}
