//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time/ticks (fixed timestep accumulator)
//! - Wall-clock seeding of the launch RNG

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest host frame fed to the accumulator (seconds)
pub const MAX_FRAME_DT: f32 = 0.1;

/// Converts variable host frame times into whole fixed ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps,
            accumulator: 0.0,
        }
    }

    /// Add a frame's elapsed time and return how many ticks to run
    ///
    /// Non-finite frame times count as zero so the accumulator stays finite.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() {
            log::warn!("Ignoring non-finite frame time: {}", frame_dt);
            return 0;
        }
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_substeps {
            self.accumulator -= self.step;
            ticks += 1;
        }

        // Still behind after the cap: drop the backlog instead of spiralling
        if self.accumulator >= self.step {
            log::trace!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator %= self.step;
        }
        ticks
    }

    /// Forget any partial tick (e.g. after the host was suspended)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

/// Seed for the launch RNG taken from the wall clock
#[cfg(target_arch = "wasm32")]
pub fn clock_seed() -> u64 {
    js_sys::Date::now() as u64
}

/// Seed for the launch RNG taken from the wall clock
#[cfg(not(target_arch = "wasm32"))]
pub fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
