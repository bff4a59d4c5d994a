//! Input systems (ECS)
//!
//! - PreUpdate: `enable_input_samplers` → `dispatch_input_events`
//! - Last: `clear_attack_edges`

use bevy::prelude::*;

use super::events::InputEvent;
use super::sampler::InputSampler;
use crate::logger;

/// Enable hook: новые samplers подписываются на input events
pub fn enable_input_samplers(mut samplers: Query<(Entity, &mut InputSampler), Added<InputSampler>>) {
    for (entity, mut sampler) in samplers.iter_mut() {
        if sampler.enable() {
            logger::log(&format!("InputSampler {:?} subscribed to input events", entity));
        }
    }
}

/// Буферизует device events в input state подписанных samplers
pub fn dispatch_input_events(
    mut events: EventReader<InputEvent>,
    mut samplers: Query<&mut InputSampler>,
) {
    for event in events.read() {
        for mut sampler in samplers.iter_mut() {
            if !sampler.is_subscribed() {
                continue;
            }

            match *event {
                InputEvent::TriggerPerformed => sampler.trigger(),
                InputEvent::PointerMoved(position) | InputEvent::PointerCanceled(position) => {
                    sampler.set_pointer(position)
                }
            }
        }
    }
}

/// Граница конца кадра: сбрасываем attack edge
///
/// Запускается в `Last` — строго после всех Update потребителей и до
/// следующего PreUpdate.
pub fn clear_attack_edges(mut samplers: Query<&mut InputSampler>) {
    for mut sampler in samplers.iter_mut() {
        // Не трогаем компонент без нужды (Changed<InputSampler> остаётся честным)
        if sampler.attack_requested() {
            sampler.end_frame();
        }
    }
}
