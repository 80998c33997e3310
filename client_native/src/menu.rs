//! Main menu: cursor state and the menu screen loop.

use raylib::prelude::*;

use game_core::Params;

use crate::text;

/// Menu entries, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play,
    About,
    Exit,
}

const ITEMS: [MenuItem; 3] = [MenuItem::Play, MenuItem::About, MenuItem::Exit];

/// Cursor over the menu entries; clamps at both ends
#[derive(Debug, Clone, Copy, Default)]
pub struct Menu {
    cursor: usize,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn down(&mut self) {
        if self.cursor + 1 < ITEMS.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> MenuItem {
        ITEMS[self.cursor]
    }
}

/// What the menu screen resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    About,
    Quit,
}

/// Run the menu until the player confirms an entry or closes the window
pub fn run(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    menu: &mut Menu,
    font: Option<&Font>,
) -> MenuAction {
    while !rl.window_should_close() {
        if rl.is_key_pressed(KeyboardKey::KEY_W) || rl.is_key_pressed(KeyboardKey::KEY_UP) {
            menu.up();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_S) || rl.is_key_pressed(KeyboardKey::KEY_DOWN) {
            menu.down();
        }
        let confirmed = rl.is_key_pressed(KeyboardKey::KEY_ENTER)
            || rl.is_key_pressed(KeyboardKey::KEY_KP_ENTER);

        {
            let mut d = rl.begin_drawing(thread);
            d.clear_background(Color::BLACK);
            let mid = Params::FIELD_WIDTH as i32 / 2;
            text::draw_label(&mut d, font, ">", mid - 120, 150 + 75 * menu.cursor() as i32, 42.0);
            text::draw_label(&mut d, font, "Play", mid - 75, 150, 42.0);
            text::draw_label(&mut d, font, "About", mid - 75, 225, 42.0);
            text::draw_label(&mut d, font, "Exit", mid - 75, 300, 42.0);
        }

        // Ending the frame polled input again, so the confirm press cannot
        // leak into the next screen's key checks.
        if confirmed {
            return match menu.selected() {
                MenuItem::Play => MenuAction::Play,
                MenuItem::About => MenuAction::About,
                MenuItem::Exit => MenuAction::Quit,
            };
        }
    }
    MenuAction::Quit
}
