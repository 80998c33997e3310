//! Text drawing with the bundled arcade font, falling back to raylib's
//! built-in font when the asset is missing.

use raylib::prelude::*;

pub const FONT_PATH: &str = "assets/PressStart2P-Regular.ttf";

pub fn draw_label(
    d: &mut RaylibDrawHandle,
    font: Option<&Font>,
    label: &str,
    x: i32,
    y: i32,
    size: f32,
) {
    match font {
        Some(font) => d.draw_text_ex(
            font,
            label,
            Vector2::new(x as f32, y as f32),
            size,
            1.0,
            Color::WHITE,
        ),
        None => d.draw_text(label, x, y, size as i32, Color::WHITE),
    }
}
