//! Input system.
//!
//! [`update_input_state`] reads hardware input from raylib each frame and
//! writes the results into [`InputState`]. Pressing the debug key triggers a
//! [`SwitchDebugEvent`].
use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputState};

fn poll(state: &mut BoolState, rl: &raylib::RaylibHandle) {
    let key: KeyboardKey = state.key_binding;
    state.active = rl.is_key_down(key);
    state.just_pressed = rl.is_key_pressed(key);
}

/// Poll raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    poll(&mut input.direction_up, &rl);
    poll(&mut input.direction_down, &rl);
    poll(&mut input.direction_left, &rl);
    poll(&mut input.direction_right, &rl);
    poll(&mut input.next_row, &rl);
    poll(&mut input.mode_debug, &rl);

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
