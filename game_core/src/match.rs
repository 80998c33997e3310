//! Match state: owns the entities, the score and the scripted opponent,
//! and advances the whole game one tick at a time.

use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Intent, Paddle, PaddleIntent, Side};
use crate::config::Config;
use crate::geometry::Aabb;
use crate::resources::{Events, GameRng, Outcome, Score};
use crate::systems::{OpponentPolicy, TrackingPolicy};
use crate::{create_ball, create_paddle, step};

/// Match phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Rallies in progress
    Playing,
    /// Either side reached the win threshold; `tick` is a no-op from here
    Finished(Outcome),
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    pub left_paddle: Aabb,
    pub right_paddle: Aabb,
    pub ball: Aabb,
    pub score: Score,
    pub phase: MatchPhase,
}

/// One first-to-five match: both paddles, the ball, the score counters and
/// the opponent policy
pub struct Match {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub phase: MatchPhase,
    policy: Box<dyn OpponentPolicy>,
}

impl Match {
    pub fn new(seed: u64) -> Self {
        Self::with_policy(seed, Box::new(TrackingPolicy))
    }

    /// Build a match with a custom opponent policy
    pub fn with_policy(seed: u64, policy: Box<dyn OpponentPolicy>) -> Self {
        let config = Config::new();
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let spawn_y = config.paddle_spawn_y();
        create_paddle(&mut world, Side::Left, spawn_y);
        create_paddle(&mut world, Side::Right, spawn_y);

        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.reset(&config, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel);

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            phase: MatchPhase::Playing,
            policy,
        }
    }

    /// Advance one tick. Does nothing once the match is finished; read the
    /// outcome from `phase` instead.
    pub fn tick(&mut self, input: Intent) {
        if let MatchPhase::Finished(_) = self.phase {
            return;
        }

        step(
            &mut self.world,
            &self.config,
            self.policy.as_ref(),
            input,
            &mut self.events,
        );

        if self.events.left_scored {
            self.score.increment_left();
            self.finish_point();
        } else if self.events.right_scored {
            self.score.increment_right();
            self.finish_point();
        }
    }

    /// Point bookkeeping: fresh serve, recentered paddles, threshold check
    fn finish_point(&mut self) {
        self.respawn_entities();
        if let Some(outcome) = self.score.outcome(self.config.win_score) {
            self.phase = MatchPhase::Finished(outcome);
        }
    }

    fn respawn_entities(&mut self) {
        let spawn_y = self.config.paddle_spawn_y();
        for (_entity, (paddle, intent)) in
            self.world.query_mut::<(&mut Paddle, &mut PaddleIntent)>()
        {
            paddle.y = spawn_y;
            intent.dir = Intent::Idle;
        }
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(&self.config, &mut self.rng);
        }
    }

    /// Current positions and score for the presentation layer
    pub fn snapshot(&self) -> Snapshot {
        let spawn_y = self.config.paddle_spawn_y();
        let mut left_paddle = self.config.paddle_rect(Side::Left, spawn_y);
        let mut right_paddle = self.config.paddle_rect(Side::Right, spawn_y);
        for (_entity, paddle) in self.world.query::<&Paddle>().iter() {
            let rect = self.config.paddle_rect(paddle.side, paddle.y);
            match paddle.side {
                Side::Left => left_paddle = rect,
                Side::Right => right_paddle = rect,
            }
        }

        let size = Vec2::splat(self.config.ball_size());
        let mut ball = Aabb::from_pos_size(self.config.ball_spawn(), size);
        for (_entity, b) in self.world.query::<&Ball>().iter() {
            ball = Aabb::from_pos_size(b.pos, size);
        }

        Snapshot {
            left_paddle,
            right_paddle,
            ball,
            score: self.score,
            phase: self.phase,
        }
    }
}
