use std::io::{self, Write};

use crate::Color;

/// Receives a canvas cell by cell when it is shown.
///
/// Rows are delivered top to bottom; `next_line` is called between rows,
/// never after the last one. `finish` closes the frame.
pub trait CanvasTarget {
    type Error: std::fmt::Display;
    fn draw(&mut self, color: Color) -> std::result::Result<(), Self::Error>;
    fn next_line(&mut self) -> std::result::Result<(), Self::Error>;

    /// Called once after the last row of a frame.
    fn finish(&mut self) -> std::result::Result<(), Self::Error> {
        Ok(())
    }
}

/// Writes frames as plain text, one line per row, each frame followed by a newline.
pub struct WriterTarget<W: Write> {
    writer: W,
    buf: [u8; 4],
}

impl<W: Write> WriterTarget<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, buf: [0; 4] }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterTarget<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CanvasTarget for WriterTarget<W> {
    type Error = io::Error;

    fn draw(&mut self, color: Color) -> io::Result<()> {
        let encoded = color.ch().encode_utf8(&mut self.buf);
        self.writer.write_all(encoded.as_bytes())
    }

    fn next_line(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\n")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

/// Collects frames into a `String`; the rendered text has no trailing newline.
#[derive(Default)]
pub struct StringTarget {
    pub text: String,
}

impl CanvasTarget for StringTarget {
    type Error = std::convert::Infallible;

    fn draw(&mut self, color: Color) -> std::result::Result<(), Self::Error> {
        self.text.push(color.ch());
        Ok(())
    }

    fn next_line(&mut self) -> std::result::Result<(), Self::Error> {
        self.text.push('\n');
        Ok(())
    }
}
