use glam::Vec2;

use crate::components::Side;
use crate::geometry::Aabb;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub ball_radius: f32,
    pub ball_launch_vx: f32,
    pub ball_launch_vy_min: f32,
    pub ball_launch_vy_max: f32,
    pub ball_spawn_bias_x: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_radius: Params::BALL_RADIUS,
            ball_launch_vx: Params::BALL_LAUNCH_VX,
            ball_launch_vy_min: Params::BALL_LAUNCH_VY_MIN,
            ball_launch_vy_max: Params::BALL_LAUNCH_VY_MAX,
            ball_spawn_bias_x: Params::BALL_SPAWN_BIAS_X,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edge length of the ball's square bounding box
    pub fn ball_size(&self) -> f32 {
        self.ball_radius * 2.0
    }

    /// X position of a paddle's left edge
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.field_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Y both paddles spawn at (vertically centered)
    pub fn paddle_spawn_y(&self) -> f32 {
        (self.field_height - self.paddle_height) / 2.0
    }

    /// Clamp a paddle's top edge so the paddle stays inside the field
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.field_height - self.paddle_height)
    }

    pub fn paddle_rect(&self, side: Side, y: f32) -> Aabb {
        Aabb::from_pos_size(
            Vec2::new(self.paddle_x(side), y),
            Vec2::new(self.paddle_width, self.paddle_height),
        )
    }

    /// Spawn position of the ball's bounding box, slightly left of center
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            self.field_width / 2.0 - self.ball_spawn_bias_x - self.ball_radius,
            self.field_height / 2.0 - self.ball_radius,
        )
    }
}
