//! Device input events
//!
//! Генерируются binding-слоем (клиент читает мышь, headless runner — скрипт)
//! и буферизуются в `InputSampler` системой `dispatch_input_events`.

use bevy::prelude::{Event, Vec2};

/// Дискретное событие устройства
///
/// # Payload
/// - `PointerMoved` / `PointerCanceled`: позиция в screen space
///   (origin top-left, y вниз — window convention)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Attack action performed (LMB)
    TriggerPerformed,

    /// Курсор сдвинулся
    PointerMoved(Vec2),

    /// Курсор потерян (ушёл из окна и т.п.)
    PointerCanceled(Vec2),
}
