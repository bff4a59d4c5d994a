//! Device binding: Bevy mouse input → InputEvent
//!
//! Запускается в PreUpdate после `InputSystem` (ButtonInput уже обновлён)
//! и до `FrameSet::Sample` (dispatch в InputSampler).

use bevy::input::InputSystem;
use bevy::prelude::*;
use bevy::window::{CursorLeft, CursorMoved, PrimaryWindow};
use raystrike_simulation::{FrameSet, InputEvent};

pub struct InputBridgePlugin;

impl Plugin for InputBridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PreUpdate,
            forward_mouse_input
                .after(InputSystem)
                .before(FrameSet::Sample),
        );
    }
}

/// LMB just_pressed → TriggerPerformed, CursorMoved → PointerMoved,
/// CursorLeft → PointerCanceled(ZERO)
fn forward_mouse_input(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut cursor_moved: EventReader<CursorMoved>,
    mut cursor_left: EventReader<CursorLeft>,
    primary: Query<Entity, With<PrimaryWindow>>,
    mut input: EventWriter<InputEvent>,
) {
    let Ok(primary) = primary.single() else {
        cursor_moved.clear();
        cursor_left.clear();
        return;
    };

    for moved in cursor_moved.read() {
        if moved.window == primary {
            input.write(InputEvent::PointerMoved(moved.position));
        }
    }

    for left in cursor_left.read() {
        if left.window == primary {
            input.write(InputEvent::PointerCanceled(Vec2::ZERO));
        }
    }

    if mouse_buttons.just_pressed(MouseButton::Left) {
        input.write(InputEvent::TriggerPerformed);
    }
}
