//! Native Pong client: window, menu shell and presentation glue around the
//! simulation core.

mod about;
mod audio;
mod game;
mod input;
mod menu;
mod text;

use anyhow::Result;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use game_core::Params;

use crate::audio::SoundBank;
use crate::menu::{Menu, MenuAction};

fn main() -> Result<()> {
    init_tracing();

    let (mut rl, thread) = raylib::init()
        .size(Params::FIELD_WIDTH as i32, Params::FIELD_HEIGHT as i32)
        .title("Pong")
        .build();
    rl.set_target_fps(Params::TICKS_PER_SECOND);

    let font = match rl.load_font(&thread, text::FONT_PATH) {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("could not load {}: {err}; using the built-in font", text::FONT_PATH);
            None
        }
    };

    let audio = RaylibAudio::init_audio_device()
        .map_err(|err| anyhow::anyhow!("audio device init failed: {err}"))?;
    let sounds = SoundBank::load(&audio);

    info!("pong up");

    let mut menu = Menu::new();
    loop {
        let action = menu::run(&mut rl, &thread, &mut menu, font.as_ref());
        info!(?action, "menu selection");
        match action {
            MenuAction::Play => game::run(&mut rl, &thread, font.as_ref(), &sounds),
            MenuAction::About => about::run(&mut rl, &thread, font.as_ref()),
            MenuAction::Quit => break,
        }
    }

    info!("bye");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
