//! Rendering module
//!
//! Draws the match through the `Surface` trait. The browser build backs it
//! with a Canvas 2D context; the headless build records the calls.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod draw;
pub mod recording;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use draw::render;
pub use recording::{DrawCommand, RecordingSurface, describe_frame};
pub use surface::{Surface, TextAlign};
