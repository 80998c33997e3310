use hecs::World;

use crate::components::{Ball, Intent, Paddle, PaddleIntent, Side};

/// Steering policy for the scripted right paddle
pub trait OpponentPolicy {
    fn decide(&self, ball_y: f32, paddle_y: f32) -> Intent;
}

/// Perfect tracker: chases the ball's top edge every tick. No reaction
/// delay or aiming error is modeled; there is no difficulty curve.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackingPolicy;

impl OpponentPolicy for TrackingPolicy {
    fn decide(&self, ball_y: f32, paddle_y: f32) -> Intent {
        if ball_y < paddle_y {
            Intent::Up
        } else if ball_y > paddle_y {
            Intent::Down
        } else {
            Intent::Idle
        }
    }
}

/// Steer the right paddle from the ball's position as it stands before the
/// ball moves this tick
pub fn drive_opponent(world: &mut World, policy: &dyn OpponentPolicy) {
    let ball_y = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_entity, ball)| ball.pos.y)
    };
    let ball_y = match ball_y {
        Some(y) => y,
        None => return,
    };

    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == Side::Right {
            intent.dir = policy.decide(ball_y, paddle.y);
        }
    }
}
