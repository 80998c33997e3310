use hecs::World;

use crate::components::{Intent, Paddle, PaddleIntent};
use crate::config::Config;

/// Apply paddle movement for this tick, clamped to the field
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != Intent::Idle {
            let delta = match intent.dir {
                Intent::Up => -config.paddle_speed,
                Intent::Down => config.paddle_speed,
                Intent::Idle => 0.0,
            };
            paddle.y = config.clamp_paddle_y(paddle.y + delta);
        }
    }
}
