//! Arcade Pong - two paddles, one ball, fixed-tick physics
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, scoring)
//! - `input`: Event router that turns discrete button events into held flags
//! - `renderer`: Draw-call projection of the match onto a 2D surface
//! - `platform`: Fixed timestep clock and wall-clock seeding
//! - `game`: The owned simulation context that ties the three together

pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use game::Game;
pub use input::{Controls, InputEvent, InputEventKind};
pub use sim::{MatchState, Side, TickReport, tick};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum ticks per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Drawing surface dimensions (pixels)
    pub const SURFACE_WIDTH: f32 = 336.0;
    pub const SURFACE_HEIGHT: f32 = 262.0;

    /// Paddle geometry
    pub const PADDLE_WIDTH: f32 = 8.0;
    pub const PADDLE_HEIGHT: f32 = 40.0;
    /// Gap between the surface edge and each paddle
    pub const PADDLE_MARGIN: f32 = 10.0;
    /// Paddle travel per tick while a direction is held
    pub const PADDLE_SPEED: f32 = 3.0;
    /// Lowest legal paddle top edge
    pub const PADDLE_MAX_Y: f32 = SURFACE_HEIGHT - PADDLE_HEIGHT;

    /// Ball is a square of this side length
    pub const BALL_SIZE: f32 = 6.0;
    /// Launch speed; the ball never speeds up during a match
    pub const INITIAL_BALL_SPEED: f32 = 2.5;
    /// Widest launch angle off the horizontal, in degrees
    pub const MAX_LAUNCH_ANGLE_DEG: f32 = 45.0;
    /// Outgoing vertical speed range of the deflection law is +/- half this
    pub const DEFLECTION_SCALE: f32 = 4.0;

    /// Right edge of the left paddle
    pub const LEFT_PADDLE_FACE: f32 = PADDLE_MARGIN + PADDLE_WIDTH;
    /// Left edge of the right paddle
    pub const RIGHT_PADDLE_FACE: f32 = SURFACE_WIDTH - PADDLE_WIDTH - PADDLE_MARGIN;
}
