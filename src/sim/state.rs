//! Match state and core simulation types
//!
//! Everything the tick reads or writes lives in `MatchState`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::consts::*;
use crate::input::Controls;

/// Which side of the court (player 1 is left, player 2 is right)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Index into per-side arrays
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn from_player(player: u8) -> Option<Self> {
        match player {
            1 => Some(Side::Left),
            2 => Some(Side::Right),
            _ => None,
        }
    }

    pub fn player(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Left edge of this side's paddle
    pub fn paddle_x(self) -> f32 {
        match self {
            Side::Left => PADDLE_MARGIN,
            Side::Right => RIGHT_PADDLE_FACE,
        }
    }
}

/// Centered paddle top edge
pub const PADDLE_START_Y: f32 = SURFACE_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0;

/// Where the ball is re-centered on launch
pub const BALL_START: Vec2 = Vec2::new(SURFACE_WIDTH / 2.0, SURFACE_HEIGHT / 2.0);

/// The ball: top-left corner of its bounding square plus per-tick velocity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Launch rule: uniform angle in [-45, 45] degrees, uniform left/right
pub fn launch_velocity<R: Rng>(rng: &mut R) -> Vec2 {
    let angle = rng
        .random_range(-MAX_LAUNCH_ANGLE_DEG..=MAX_LAUNCH_ANGLE_DEG)
        .to_radians();
    let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    Vec2::new(
        direction * INITIAL_BALL_SPEED * angle.cos(),
        INITIAL_BALL_SPEED * angle.sin(),
    )
}

/// Points per side; no win condition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Scores {
    pub left: u64,
    pub right: u64,
}

impl Scores {
    pub fn get(&self, side: Side) -> u64 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Complete match state (deterministic for a given seed and event order)
#[derive(Debug, Clone, Serialize)]
pub struct MatchState {
    /// Seed the launch RNG was created from
    pub seed: u64,
    /// Paddle top edges, indexed by `Side::index()`
    pub paddles: [f32; 2],
    pub ball: Ball,
    pub scores: Scores,
    /// Held flags and the start latch
    pub controls: Controls,
    /// Ticks simulated since the match started
    pub time_ticks: u64,
    #[serde(skip)]
    rng: Pcg32,
}

impl MatchState {
    /// Centered paddles, launched ball, zero scores, not started
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            paddles: [PADDLE_START_Y; 2],
            ball: Ball {
                pos: BALL_START,
                vel: Vec2::ZERO,
            },
            scores: Scores::default(),
            controls: Controls::default(),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset_ball();
        state
    }

    pub fn started(&self) -> bool {
        self.controls.started
    }

    pub fn paddle_y(&self, side: Side) -> f32 {
        self.paddles[side.index()]
    }

    /// Re-center the ball and draw a fresh launch velocity
    pub fn reset_ball(&mut self) {
        self.ball.pos = BALL_START;
        self.ball.vel = launch_velocity(&mut self.rng);
    }

    /// JSON snapshot of everything except the RNG
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
