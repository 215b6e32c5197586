//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{bounce_off_walls, deflect, paddle_response, touches_paddle};
pub use state::{Ball, MatchState, Scores, Side, launch_velocity};
pub use tick::{TickReport, tick};
