//! Game session
//!
//! `Game` owns the match and the fixed-step clock. Hosts hand it input
//! events as they arrive and call `frame` once per display frame; every tick
//! therefore sees fully applied events.

use crate::input::{InputEvent, Routed};
use crate::platform::FixedStep;
use crate::renderer::{Surface, render};
use crate::sim::{MatchState, TickReport, tick};

pub struct Game {
    pub state: MatchState,
    clock: FixedStep,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        log::info!("Match created with seed: {}", seed);
        Self::with_state(MatchState::new(seed))
    }

    pub fn with_state(state: MatchState) -> Self {
        Self {
            state,
            clock: FixedStep::default(),
        }
    }

    /// Route one input event into the control flags
    pub fn handle_event(&mut self, event: &InputEvent) -> Routed {
        let routed = self.state.controls.route(event);
        match routed {
            Routed::Started => log::info!("Match started by player {}", event.player),
            Routed::Held { .. } => log::trace!("{:?}", routed),
            Routed::Ignored => log::trace!("Ignored input event: {:?}", event),
        }
        routed
    }

    /// Run exactly one tick
    pub fn step(&mut self) -> TickReport {
        let report = tick(&mut self.state);
        if let Some(side) = report.scored {
            log::info!(
                "Player {} scores ({} - {})",
                side.player(),
                self.state.scores.left,
                self.state.scores.right
            );
            if log::log_enabled!(log::Level::Debug) {
                match self.state.snapshot_json() {
                    Ok(json) => log::debug!("Match snapshot: {}", json),
                    Err(e) => log::warn!("Failed to snapshot match: {}", e),
                }
            }
        }
        report
    }

    /// Feed host frame time; runs the ticks that are due and returns the count
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let ticks = self.clock.advance(frame_dt);
        for _ in 0..ticks {
            self.step();
        }
        ticks
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        render(&self.state, surface);
    }

    /// Simulate then draw one host frame
    pub fn frame<S: Surface + ?Sized>(&mut self, frame_dt: f32, surface: &mut S) -> u32 {
        let ticks = self.advance(frame_dt);
        self.render(surface);
        log::trace!("Frame: {} ticks", ticks);
        ticks
    }

    /// Drop any partial tick, e.g. when the host resumes after a pause
    pub fn resync_clock(&mut self) {
        self.clock.reset();
    }
}
