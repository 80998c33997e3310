/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 900.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 8.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_SPEED: f32 = 5.0; // px per tick
    pub const PADDLE_INSET: f32 = 5.0; // gap between a paddle and its wall

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_LAUNCH_VX: f32 = -5.0; // serves toward the left paddle
    pub const BALL_LAUNCH_VY_MIN: f32 = 2.0;
    pub const BALL_LAUNCH_VY_MAX: f32 = 7.0; // exclusive
    pub const BALL_SPAWN_BIAS_X: f32 = 20.0; // spawn sits this far left of center

    // Score
    pub const WIN_SCORE: u8 = 5; // first to 5 wins

    // Pacing
    pub const TICKS_PER_SECOND: u32 = 60;
}
