//! In-memory surface that records draw calls
//!
//! Used by the headless host and by tests to inspect a frame.

use super::surface::{Surface, TextAlign};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        color: String,
    },
    SetLineDash {
        dash: f32,
        gap: f32,
    },
    ClearLineDash,
    BeginPath,
    MoveTo {
        x: f32,
        y: f32,
    },
    LineTo {
        x: f32,
        y: f32,
    },
    Stroke {
        color: String,
    },
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: String,
    },
    FillText {
        text: String,
        x: f32,
        y: f32,
        font: String,
        color: String,
        align: TextAlign,
    },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the recorded frame, leaving the recorder empty
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// All text drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All filled rectangles as (x, y, w, h)
    pub fn rects(&self) -> Vec<(f32, f32, f32, f32)> {
        self.commands
            .iter()
            .filter_map(|cmd| match *cmd {
                DrawCommand::FillRect { x, y, w, h, .. } => Some((x, y, w, h)),
                _ => None,
            })
            .collect()
    }
}

/// One-line summary of a recorded frame: call count, filled rects and text
pub fn describe_frame(commands: &[DrawCommand]) -> String {
    let mut rects = Vec::new();
    let mut texts = Vec::new();
    for cmd in commands {
        match cmd {
            DrawCommand::FillRect { x, y, w, h, .. } => {
                rects.push(format!("{x:.1},{y:.1} {w}x{h}"));
            }
            DrawCommand::FillText { text, .. } => texts.push(format!("{text:?}")),
            _ => {}
        }
    }
    format!(
        "{} calls; rects [{}]; text [{}]",
        commands.len(),
        rects.join(" | "),
        texts.join(", ")
    )
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: &str) {
        self.commands.push(DrawCommand::Clear {
            color: color.to_string(),
        });
    }

    fn set_line_dash(&mut self, dash: f32, gap: f32) {
        self.commands.push(DrawCommand::SetLineDash { dash, gap });
    }

    fn clear_line_dash(&mut self) {
        self.commands.push(DrawCommand::ClearLineDash);
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn stroke(&mut self, color: &str) {
        self.commands.push(DrawCommand::Stroke {
            color: color.to_string(),
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str, align: TextAlign) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
            color: color.to_string(),
            align,
        });
    }
}
