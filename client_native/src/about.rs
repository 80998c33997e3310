//! About screen.

use raylib::prelude::*;

use game_core::Params;

use crate::text;

const LINES: [&str; 5] = [
    "A tiny two-paddle ball game.",
    "",
    "W / Up     move your paddle up",
    "S / Down   move your paddle down",
    "First to 5 points takes the match.",
];

/// Show the about text until the player confirms or closes the window
pub fn run(rl: &mut RaylibHandle, thread: &RaylibThread, font: Option<&Font>) {
    while !rl.window_should_close() {
        let confirmed = rl.is_key_pressed(KeyboardKey::KEY_ENTER)
            || rl.is_key_pressed(KeyboardKey::KEY_KP_ENTER);

        {
            let mut d = rl.begin_drawing(thread);
            d.clear_background(Color::BLACK);
            let left = Params::FIELD_WIDTH as i32 / 2 - 350;
            for (row, line) in LINES.iter().enumerate() {
                text::draw_label(&mut d, font, line, left, 50 + 25 * row as i32, 24.0);
            }
            text::draw_label(&mut d, font, "> Exit", Params::FIELD_WIDTH as i32 - 200, 450, 24.0);
        }

        if confirmed {
            return;
        }
    }
}
