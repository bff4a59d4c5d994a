//! Player input module
//!
//! # Архитектура
//!
//! ```text
//! Device (мышь / скрипт)
//!     ↓
//! InputEvent (ECS event) - events.rs
//!     ↓
//! dispatch_input_events (PreUpdate) - systems.rs
//!     ↓
//! InputSampler (component) - sampler.rs
//!     ↓
//! attack_on_edge (Update) → clear_attack_edges (Last)
//! ```

pub mod events;
pub mod projection;
pub mod sampler;
pub mod systems;

pub use events::*;
pub use projection::*;
pub use sampler::*;
pub use systems::*;

use bevy::prelude::*;

use crate::FrameSet;

/// Input Plugin: события устройства + sampling/clear системы
pub struct PlayerInputPlugin;

impl Plugin for PlayerInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<InputEvent>()
            .init_resource::<ScreenProjection>();

        app.add_systems(
            PreUpdate,
            (enable_input_samplers, dispatch_input_events)
                .chain()
                .in_set(FrameSet::Sample),
        );
        app.add_systems(Last, clear_attack_edges.in_set(FrameSet::FrameEnd));
    }
}
