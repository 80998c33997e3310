//! Sound assets and the simulation event to playback mapping.

use raylib::prelude::*;
use tracing::warn;

use game_core::Events;

pub const PONG_SOUND_PATH: &str = "assets/pong.ogg";
pub const SCORE_SOUND_PATH: &str = "assets/score.ogg";

/// Loaded sound effects; a missing file just mutes that effect
pub struct SoundBank<'aud> {
    pong: Option<Sound<'aud>>,
    score: Option<Sound<'aud>>,
}

impl<'aud> SoundBank<'aud> {
    pub fn load(audio: &'aud RaylibAudio) -> Self {
        Self {
            pong: load_sound(audio, PONG_SOUND_PATH),
            score: load_sound(audio, SCORE_SOUND_PATH),
        }
    }

    /// Map this tick's simulation events onto playback. Paddle hits play
    /// the pong blip, points play the score jingle; wall bounces are
    /// silent.
    pub fn play_events(&self, events: &Events) {
        if events.ball_hit_paddle {
            play(&self.pong);
        }
        if events.point_scored() {
            play(&self.score);
        }
    }
}

fn load_sound<'aud>(audio: &'aud RaylibAudio, path: &str) -> Option<Sound<'aud>> {
    match audio.new_sound(path) {
        Ok(sound) => Some(sound),
        Err(err) => {
            warn!("could not load {path}: {err}; muting that effect");
            None
        }
    }
}

fn play(sound: &Option<Sound<'_>>) {
    if let Some(sound) = sound {
        sound.play();
    }
}
