//! The match screen: one full game from first serve to verdict.

use std::thread::sleep;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use raylib::prelude::*;
use tracing::info;

use game_core::{Aabb, Match, MatchPhase, Outcome, Params, Snapshot};

use crate::audio::SoundBank;
use crate::{input, text};

/// Freeze after a point or a verdict so the players can take it in
const PAUSE: Duration = Duration::from_secs(1);

/// Play one match to its end; returns to the menu afterwards (or early, if
/// the window is closed)
pub fn run(rl: &mut RaylibHandle, thread: &RaylibThread, font: Option<&Font>, sounds: &SoundBank) {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0);
    let mut game = Match::new(seed);
    info!(seed, "match started");

    while !rl.window_should_close() {
        let intent = input::poll(rl);
        game.tick(intent);
        sounds.play_events(&game.events);

        let snap = game.snapshot();
        {
            let mut d = rl.begin_drawing(thread);
            draw_field(&mut d, font, &snap);
        }

        // Hold the freshly reset field on screen for a moment.
        if game.events.point_scored() {
            sleep(PAUSE);
        }

        if let MatchPhase::Finished(outcome) = game.phase {
            info!(
                ?outcome,
                left = game.score.left,
                right = game.score.right,
                "match finished"
            );
            show_verdict(rl, thread, font, outcome, &snap);
            return;
        }
    }
}

fn draw_field(d: &mut RaylibDrawHandle, font: Option<&Font>, snap: &Snapshot) {
    d.clear_background(Color::BLACK);

    let mid = Params::FIELD_WIDTH as i32 / 2;
    d.draw_rectangle(mid - 2, 0, 4, Params::FIELD_HEIGHT as i32, Color::WHITE);

    draw_rect(d, &snap.left_paddle);
    draw_rect(d, &snap.right_paddle);

    // The ball is a circle centered in its bounding box.
    let center = (snap.ball.min + snap.ball.max) * 0.5;
    let radius = snap.ball.size().x / 2.0;
    d.draw_circle(center.x as i32, center.y as i32, radius, Color::WHITE);

    text::draw_label(d, font, &snap.score.left.to_string(), mid - 50, 50, 42.0);
    text::draw_label(d, font, &snap.score.right.to_string(), mid + 25, 50, 42.0);
}

fn draw_rect(d: &mut RaylibDrawHandle, rect: &Aabb) {
    let size = rect.size();
    d.draw_rectangle(
        rect.min.x as i32,
        rect.min.y as i32,
        size.x as i32,
        size.y as i32,
        Color::WHITE,
    );
}

fn show_verdict(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    font: Option<&Font>,
    outcome: Outcome,
    snap: &Snapshot,
) {
    let label = match outcome {
        Outcome::LeftWins => "You win!",
        Outcome::RightWins => "You lose!",
        Outcome::Draw => "Draw!",
    };

    {
        let mut d = rl.begin_drawing(thread);
        draw_field(&mut d, font, snap);
        text::draw_label(&mut d, font, label, Params::FIELD_WIDTH as i32 / 2 - 100, 200, 42.0);
    }
    sleep(PAUSE);
}
