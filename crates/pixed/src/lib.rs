//! pixed: an in-memory raster canvas driven by a tiny text command language.
//! Commands: I (init), C (clear), L (pixel), V/H (segments), F (flood fill), S (show).

pub mod canvas;
mod color;
pub mod command;
mod editor;
mod error;
pub mod target;
pub use canvas::Canvas;
pub use color::Color;
pub use command::Command;
pub use editor::Editor;
pub use error::{EditorError, Result};
pub use target::{CanvasTarget, StringTarget, WriterTarget};

// Test utilities
pub mod test_support;
