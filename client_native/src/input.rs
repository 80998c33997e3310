//! Raw key state to paddle intent.

use raylib::prelude::*;

use game_core::Intent;

/// Collapse the held up/down keys into one steering intent; both held
/// cancel out
pub fn intent_from_keys(up_held: bool, down_held: bool) -> Intent {
    match (up_held, down_held) {
        (true, false) => Intent::Up,
        (false, true) => Intent::Down,
        _ => Intent::Idle,
    }
}

/// Sample the player's steering for this frame
pub fn poll(rl: &RaylibHandle) -> Intent {
    let up = rl.is_key_down(KeyboardKey::KEY_W) || rl.is_key_down(KeyboardKey::KEY_UP);
    let down = rl.is_key_down(KeyboardKey::KEY_S) || rl.is_key_down(KeyboardKey::KEY_DOWN);
    intent_from_keys(up, down)
}
