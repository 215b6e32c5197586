//! Drawing surface abstraction
//!
//! The renderer only ever issues draw calls through this trait; nothing is
//! read back. Colors and fonts are CSS strings so a Canvas 2D context can
//! take them as-is.

/// Horizontal anchor for `fill_text`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        }
    }
}

/// A 2D surface exposing primitive shape and text operations
pub trait Surface {
    /// Fill the whole surface with `color`
    fn clear(&mut self, color: &str);
    /// Dash pattern for subsequent strokes
    fn set_line_dash(&mut self, dash: f32, gap: f32);
    /// Back to solid strokes
    fn clear_line_dash(&mut self);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    /// Stroke the current path
    fn stroke(&mut self, color: &str);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str, align: TextAlign);
}
