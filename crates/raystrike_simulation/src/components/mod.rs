//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: Player, Enemy, Health (+ Damageable capability)
//! - combat: Attacker

pub mod actor;
pub mod combat;

pub use actor::*;
pub use combat::*;
