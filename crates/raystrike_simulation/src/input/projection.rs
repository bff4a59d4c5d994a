//! Screen → world проекция (camera/viewport capability)

use bevy::prelude::*;

/// Проекция экранной точки в 2D мир
///
/// - `Identity`: screen == world (headless сценарии, тесты)
/// - `Orthographic`: 2D камера; клиент синхронизирует параметры каждый кадр
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub enum ScreenProjection {
    #[default]
    Identity,

    Orthographic {
        /// Мировая позиция центра камеры
        center: Vec2,
        /// Размер viewport в пикселях
        viewport_size: Vec2,
        /// World units на пиксель
        scale: f32,
    },
}

impl ScreenProjection {
    /// Screen space: origin top-left, y вниз. World: y вверх.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        match *self {
            ScreenProjection::Identity => screen,
            ScreenProjection::Orthographic {
                center,
                viewport_size,
                scale,
            } => {
                let offset = (screen - viewport_size * 0.5) * scale;
                Vec2::new(center.x + offset.x, center.y - offset.y)
            }
        }
    }

    /// Обратная проекция (scripted input целится в мировые точки)
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        match *self {
            ScreenProjection::Identity => world,
            ScreenProjection::Orthographic {
                center,
                viewport_size,
                scale,
            } => {
                if scale == 0.0 {
                    return viewport_size * 0.5;
                }
                let offset = Vec2::new(world.x - center.x, center.y - world.y) / scale;
                offset + viewport_size * 0.5
            }
        }
    }
}
