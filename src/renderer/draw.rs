//! Frame drawing
//!
//! A pure projection of `MatchState` into draw calls. Reads state, never
//! writes it, and draws the same frame for the same state.

use super::surface::{Surface, TextAlign};
use crate::consts::*;
use crate::sim::{MatchState, Side};

/// Palette
pub const BACKGROUND: &str = "#1a1a2e";
pub const CENTER_LINE: &str = "#444";
pub const FOREGROUND: &str = "#eee";

/// Center line dash and gap lengths
pub const CENTER_DASH: (f32, f32) = (5.0, 5.0);

pub const SCORE_FONT: &str = "24px monospace";
pub const SCORE_Y: f32 = 40.0;
/// Score x positions, indexed by `Side::index()`
pub const SCORE_X: [f32; 2] = [100.0, 236.0];

pub const OVERLAY_FONT: &str = "12px monospace";
/// Waiting-for-start overlay: (text, baseline y)
pub const OVERLAY_LINES: [(&str, f32); 2] = [
    ("Press any button to start", 150.0),
    ("P1: UP/DOWN  P2: UP/DOWN", 170.0),
];

/// Draw one frame of the match
pub fn render<S: Surface + ?Sized>(state: &MatchState, surface: &mut S) {
    surface.clear(BACKGROUND);

    // Center line
    let mid_x = SURFACE_WIDTH / 2.0;
    surface.set_line_dash(CENTER_DASH.0, CENTER_DASH.1);
    surface.begin_path();
    surface.move_to(mid_x, 0.0);
    surface.line_to(mid_x, SURFACE_HEIGHT);
    surface.stroke(CENTER_LINE);
    surface.clear_line_dash();

    for side in Side::BOTH {
        surface.fill_rect(
            side.paddle_x(),
            state.paddle_y(side),
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
            FOREGROUND,
        );
    }

    let ball = state.ball.pos;
    surface.fill_rect(ball.x, ball.y, BALL_SIZE, BALL_SIZE, FOREGROUND);

    for side in Side::BOTH {
        surface.fill_text(
            &state.scores.get(side).to_string(),
            SCORE_X[side.index()],
            SCORE_Y,
            SCORE_FONT,
            FOREGROUND,
            TextAlign::Center,
        );
    }

    if !state.started() {
        for (text, y) in OVERLAY_LINES {
            surface.fill_text(text, mid_x, y, OVERLAY_FONT, FOREGROUND, TextAlign::Center);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{DrawCommand, RecordingSurface};
    use glam::Vec2;

    #[test]
    fn test_waiting_frame_has_overlay() {
        let state = MatchState::new(1);
        let mut surface = RecordingSurface::new();
        render(&state, &mut surface);

        assert_eq!(
            surface.texts(),
            vec![
                "0",
                "0",
                "Press any button to start",
                "P1: UP/DOWN  P2: UP/DOWN"
            ]
        );
        assert_eq!(
            surface.commands[0],
            DrawCommand::Clear {
                color: BACKGROUND.to_string()
            }
        );
    }

    #[test]
    fn test_started_frame_layout() {
        let mut state = MatchState::new(1);
        state.controls.started = true;
        state.paddles = [20.0, 200.0];
        state.ball.pos = Vec2::new(50.5, 60.25);
        state.scores.left = 3;
        state.scores.right = 12;

        let mut surface = RecordingSurface::new();
        render(&state, &mut surface);

        assert_eq!(surface.texts(), vec!["3", "12"]);
        assert_eq!(
            surface.rects(),
            vec![
                (10.0, 20.0, 8.0, 40.0),
                (318.0, 200.0, 8.0, 40.0),
                (50.5, 60.25, 6.0, 6.0),
            ]
        );
    }

    #[test]
    fn test_center_line_is_dashed_then_reset() {
        let state = MatchState::new(1);
        let mut surface = RecordingSurface::new();
        render(&state, &mut surface);

        assert_eq!(
            &surface.commands[1..7],
            &[
                DrawCommand::SetLineDash { dash: 5.0, gap: 5.0 },
                DrawCommand::BeginPath,
                DrawCommand::MoveTo { x: 168.0, y: 0.0 },
                DrawCommand::LineTo { x: 168.0, y: 262.0 },
                DrawCommand::Stroke {
                    color: CENTER_LINE.to_string()
                },
                DrawCommand::ClearLineDash,
            ]
        );
    }

    #[test]
    fn test_render_is_repeatable() {
        let state = MatchState::new(8);
        let before = state.snapshot_json().unwrap();

        let mut first = RecordingSurface::new();
        let mut second = RecordingSurface::new();
        render(&state, &mut first);
        render(&state, &mut second);

        assert_eq!(first.commands, second.commands);
        assert_eq!(state.snapshot_json().unwrap(), before);
    }
}
