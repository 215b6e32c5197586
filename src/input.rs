//! Input event routing
//!
//! The host delivers discrete button events; the router folds them into a
//! small record of held flags plus the one-shot "match started" latch.
//! Positions are never touched here - the tick reads the flags.

use serde::Serialize;
use thiserror::Error;

use crate::sim::Side;

/// Subject type of events the router acts on
pub const BUTTON_SUBJECT: &str = "button";

/// Category of an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEventKind {
    /// A button started being held
    InputStart,
    /// A held button was released
    InputEnd,
    /// Generic press edge (used to start the match)
    Press,
}

/// A discrete event from the input source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    pub kind: InputEventKind,
    /// Subject type, only `"button"` is acted on
    pub subject: String,
    /// Player number (1 or 2)
    pub player: u8,
    /// Button identity token, e.g. `"UP"`
    pub button: String,
    /// Physical button state at the time of the event
    pub pressed: bool,
}

impl InputEvent {
    /// Build a button event; `pressed` follows the category
    pub fn button(kind: InputEventKind, player: u8, button: impl Into<String>) -> Self {
        Self {
            kind,
            subject: BUTTON_SUBJECT.to_string(),
            player,
            button: button.into(),
            pressed: kind != InputEventKind::InputEnd,
        }
    }

    pub fn press(player: u8, button: impl Into<String>) -> Self {
        Self::button(InputEventKind::Press, player, button)
    }

    pub fn hold_start(player: u8, button: impl Into<String>) -> Self {
        Self::button(InputEventKind::InputStart, player, button)
    }

    pub fn hold_end(player: u8, button: impl Into<String>) -> Self {
        Self::button(InputEventKind::InputEnd, player, button)
    }
}

/// Paddle direction a button controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Parse a button token (exact match)
    pub fn from_button(button: &str) -> Option<Self> {
        match button {
            "UP" => Some(Direction::Up),
            "DOWN" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Held flags for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PaddleControl {
    pub moving_up: bool,
    pub moving_down: bool,
}

impl PaddleControl {
    fn set(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Up => self.moving_up = held,
            Direction::Down => self.moving_down = held,
        }
    }
}

/// What a routed event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routed {
    /// The event latched the match start and was consumed
    Started,
    /// A held flag was written
    Held {
        side: Side,
        direction: Direction,
        held: bool,
    },
    /// Unrecognized category, subject, player or button
    Ignored,
}

/// Control state written by the router and read by the tick
///
/// Transitions:
/// - `Press` while not started: `started = true`, nothing else.
/// - `InputStart` for a known player/button: that flag becomes `true`.
/// - `InputEnd` for a known player/button: that flag becomes `false`.
/// - Anything else: no change. `started` never goes back to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Controls {
    pub started: bool,
    /// Indexed by `Side::index()`
    pub paddles: [PaddleControl; 2],
}

impl Controls {
    pub fn paddle(&self, side: Side) -> &PaddleControl {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut PaddleControl {
        &mut self.paddles[side.index()]
    }

    /// Apply one event atomically
    pub fn route(&mut self, event: &InputEvent) -> Routed {
        if !self.started && event.kind == InputEventKind::Press {
            self.started = true;
            return Routed::Started;
        }

        let held = match event.kind {
            InputEventKind::InputStart => true,
            InputEventKind::InputEnd => false,
            InputEventKind::Press => return Routed::Ignored,
        };

        if event.subject != BUTTON_SUBJECT {
            return Routed::Ignored;
        }
        let Some(side) = Side::from_player(event.player) else {
            return Routed::Ignored;
        };
        let Some(direction) = Direction::from_button(&event.button) else {
            return Routed::Ignored;
        };

        self.paddle_mut(side).set(direction, held);
        Routed::Held {
            side,
            direction,
            held,
        }
    }
}

/// Keyboard bindings for hosts without arcade buttons
pub mod keymap {
    use super::InputEvent;

    /// Map a `KeyboardEvent.key` value to a (player, button) pair
    pub fn binding(key: &str) -> Option<(u8, &'static str)> {
        match key {
            "w" | "W" => Some((1, "UP")),
            "s" | "S" => Some((1, "DOWN")),
            "ArrowUp" => Some((2, "UP")),
            "ArrowDown" => Some((2, "DOWN")),
            " " | "Enter" => Some((1, "A")),
            _ => None,
        }
    }

    /// Translate a host key transition into router events
    ///
    /// Key down yields a press edge followed by a hold start; key up yields a
    /// hold end. Auto-repeat key downs yield nothing.
    pub fn translate(key: &str, down: bool, repeat: bool) -> Vec<InputEvent> {
        let Some((player, button)) = binding(key) else {
            return Vec::new();
        };
        match (down, repeat) {
            (true, false) => vec![
                InputEvent::press(player, button),
                InputEvent::hold_start(player, button),
            ],
            (true, true) => Vec::new(),
            (false, _) => vec![InputEvent::hold_end(player, button)],
        }
    }
}

/// Malformed text command from the headless host
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}` (expected start, end or press)")]
    UnknownVerb(String),
    #[error("invalid player number `{0}`")]
    InvalidPlayer(String),
    #[error("`{0}` needs a player and a button")]
    MissingArgument(&'static str),
}

/// Parse a line such as `start 1 UP`, `end 2 DOWN` or `press`
///
/// A bare `press` is a press of player 1's `A` button.
pub fn parse_command(line: &str) -> Result<InputEvent, CommandError> {
    let mut words = line.split_whitespace();
    let verb = words.next().ok_or(CommandError::Empty)?;
    let (kind, name) = match verb.to_ascii_lowercase().as_str() {
        "start" => (InputEventKind::InputStart, "start"),
        "end" => (InputEventKind::InputEnd, "end"),
        "press" => (InputEventKind::Press, "press"),
        _ => return Err(CommandError::UnknownVerb(verb.to_string())),
    };

    let (player, button) = match (words.next(), words.next()) {
        (Some(player), Some(button)) => {
            let player = player
                .parse::<u8>()
                .map_err(|_| CommandError::InvalidPlayer(player.to_string()))?;
            (player, button.to_ascii_uppercase())
        }
        (None, _) if kind == InputEventKind::Press => (1, "A".to_string()),
        _ => return Err(CommandError::MissingArgument(name)),
    };

    Ok(InputEvent::button(kind, player, button))
}
