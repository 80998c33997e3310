use glam::Vec2;

use crate::config::Config;
use crate::resources::GameRng;

/// Which half of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Abstract steering input for one tick, decoupled from key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Intent {
    Up,
    Down,
    #[default]
    Idle,
}

/// Paddle component - x is fixed per side, only y moves
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Movement intent for a paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: Intent,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component - pos is the top-left corner of its bounding box
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Put the ball back on its spawn point with a fresh serve: fixed vx
    /// toward the left paddle, random downward vy
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        use rand::Rng;
        self.pos = config.ball_spawn();
        self.vel = Vec2::new(
            config.ball_launch_vx,
            rng.0
                .gen_range(config.ball_launch_vy_min..config.ball_launch_vy_max),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_reset_serves_toward_left_paddle() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);

        ball.reset(&config, &mut rng);

        assert_eq!(ball.pos, config.ball_spawn());
        assert_eq!(ball.vel.x, config.ball_launch_vx);
        assert!(
            ball.vel.y >= config.ball_launch_vy_min && ball.vel.y < config.ball_launch_vy_max,
            "serve vy must come from the launch range"
        );
    }

    #[test]
    fn test_ball_reset_is_seed_deterministic() {
        let config = Config::new();
        let mut ball_a = Ball::new(Vec2::ZERO, Vec2::ZERO);
        let mut ball_b = Ball::new(Vec2::ZERO, Vec2::ZERO);

        ball_a.reset(&config, &mut GameRng::new(42));
        ball_b.reset(&config, &mut GameRng::new(42));

        assert_eq!(ball_a.vel, ball_b.vel);
    }
}
