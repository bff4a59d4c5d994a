//! Combat system module
//!
//! ECS ответственность:
//! - Actor Controller: attack edge → raycast → DamageRequest
//! - Damageable: DamageRequest → Health → DamageDealt / EntityRemoved
//! - Host: EntityRemoved → despawn

use bevy::prelude::*;

use crate::FrameSet;

pub mod attack;
pub mod damage;

pub use attack::{attack_on_edge, AttackOutcome, AttackResolved};
pub use damage::{apply_damage, despawn_removed, DamageDealt, DamageRequest, EntityRemoved};

/// Combat Plugin
///
/// Порядок выполнения (Update):
/// 1. FrameSet::Act — attack_on_edge
/// 2. FrameSet::React — apply_damage → despawn_removed
///
/// Всё в пределах одного кадра: урон от edge'а применяется в том же кадре.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<DamageRequest>()
            .add_event::<DamageDealt>()
            .add_event::<EntityRemoved>()
            .add_event::<AttackResolved>();

        app.add_systems(Update, attack_on_edge.in_set(FrameSet::Act));
        app.add_systems(
            Update,
            (apply_damage, despawn_removed)
                .chain()
                .in_set(FrameSet::React),
        );
    }
}
