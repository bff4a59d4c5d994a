//! Physics module
//!
//! Коллайдеры и spatial query через avian2d. Динамики нет: все тела Static,
//! позиции задаёт Transform, avian синхронизирует их в `Position`.
//!
//! Physics schedule крутится в PreUpdate, но avian пропускает step, пока
//! physics clock не сдвинулся (первый кадр, пауза). Поэтому перед
//! `FrameSet::Act` pipeline spatial query пересобирается явно: коллайдер,
//! заспавненный до кадра, виден raycast'у уже в этом кадре.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::FrameSet;

pub mod raycast;

pub use raycast::{cast_attack_ray, RayHit};

/// Радиус коллайдера актора по умолчанию (world units)
pub const DEFAULT_ACTOR_RADIUS: f32 = 0.5;

/// Avian в PreUpdate + нулевая гравитация
pub struct SimulationPhysicsPlugin;

impl Plugin for SimulationPhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PhysicsPlugins::new(PreUpdate))
            .insert_resource(Gravity(Vec2::ZERO))
            .add_systems(
                Update,
                (init_spawned_positions, refresh_spatial_query)
                    .chain()
                    .before(FrameSet::Act),
            );
    }
}

/// Root тела, добавленные с прошлого кадра: Position = Transform
///
/// GlobalTransform ещё не пропагирован (PostUpdate), для root entity
/// локальный Transform и есть world.
pub fn init_spawned_positions(
    mut bodies: Query<(&Transform, &mut Position), (Added<RigidBody>, Without<ChildOf>)>,
) {
    for (transform, mut position) in bodies.iter_mut() {
        let translation = transform.translation.truncate();
        if position.0 != translation {
            position.0 = translation;
        }
    }
}

/// Пересборка spatial query pipeline до потребителей attack edge
pub fn refresh_spatial_query(mut spatial: SpatialQuery) {
    spatial.update_pipeline();
}

/// Круглый static коллайдер
pub fn circle_body(radius: f32) -> impl Bundle {
    (RigidBody::Static, Collider::circle(radius))
}

/// Прямоугольный static коллайдер (half extents, как у Transform-центра)
pub fn box_body(half_extents: Vec2) -> impl Bundle {
    (
        RigidBody::Static,
        Collider::rectangle(half_extents.x * 2.0, half_extents.y * 2.0),
    )
}
