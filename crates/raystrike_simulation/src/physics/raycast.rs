//! Attack raycast поверх avian `SpatialQuery`

use avian2d::prelude::*;
use bevy::prelude::*;

/// Результат raycast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: Entity,
    pub distance: f32,
    pub point: Vec2,
}

/// Ближайшее попадание луча, caster исключён
///
/// `solid = true`: origin внутри коллайдера даёт попадание на distance 0.
pub fn cast_attack_ray(
    spatial: &SpatialQuery,
    origin: Vec2,
    direction: Dir2,
    max_distance: f32,
    caster: Entity,
) -> Option<RayHit> {
    let filter = SpatialQueryFilter::default().with_excluded_entities([caster]);

    spatial
        .cast_ray(origin, direction, max_distance, true, &filter)
        .map(|hit| RayHit {
            entity: hit.entity,
            distance: hit.distance,
            point: origin + *direction * hit.distance,
        })
}
