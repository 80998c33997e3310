/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

/// Final result of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    LeftWins,
    RightWins,
    /// Unreachable through one-point increments; only tampered score state
    /// can produce it, and it must not crown the wrong side.
    Draw,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    /// Some(outcome) once either counter has reached the threshold
    pub fn outcome(&self, win_score: u8) -> Option<Outcome> {
        if self.left < win_score && self.right < win_score {
            return None;
        }
        if self.left > self.right {
            Some(Outcome::LeftWins)
        } else if self.right > self.left {
            Some(Outcome::RightWins)
        } else {
            Some(Outcome::Draw)
        }
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when either side took the point this tick
    pub fn point_scored(&self) -> bool {
        self.left_scored || self.right_scored
    }
}

/// Random number generator for serve velocities, seedable so matches are
/// reproducible
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}
