//! Test support utilities for pixed.
//!
//! This module provides helper types that are useful for testing what the
//! `S` command shows, but are not part of the public API.

use crate::{CanvasTarget, Color};

/// A memory target useful for tests.
///
/// Every shown frame is captured as a list of row strings.
pub struct MemoryTarget {
    pub frames: Vec<Vec<String>>,
    open: bool,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            open: false,
        }
    }

    /// The most recent frame joined the way `Canvas::render` joins rows.
    pub fn last_frame(&self) -> Option<String> {
        self.frames.last().map(|rows| rows.join("\n"))
    }

    fn current(&mut self) -> &mut Vec<String> {
        if !self.open {
            self.frames.push(vec![String::new()]);
            self.open = true;
        }
        // a frame is pushed above whenever none is open
        let frame = self.frames.len() - 1;
        &mut self.frames[frame]
    }
}

impl Default for MemoryTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasTarget for MemoryTarget {
    type Error = std::convert::Infallible;

    fn draw(&mut self, color: Color) -> std::result::Result<(), Self::Error> {
        let frame = self.current();
        let row = frame.len() - 1;
        frame[row].push(color.ch());
        Ok(())
    }

    fn next_line(&mut self) -> std::result::Result<(), Self::Error> {
        self.current().push(String::new());
        Ok(())
    }

    fn finish(&mut self) -> std::result::Result<(), Self::Error> {
        self.open = false;
        Ok(())
    }
}
