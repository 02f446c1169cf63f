use std::io::{self, Stdout, Write};

use pixed::{CanvasTarget, Color};

/// Shows frames on stdout, optionally as ANSI 256-colour blocks.
pub struct ConsoleTarget {
    out: Stdout,
    ansi: bool,
    line: String,
}

impl ConsoleTarget {
    pub fn new(ansi: bool) -> Self {
        Self {
            out: io::stdout(),
            ansi,
            line: String::new(),
        }
    }

    fn flush_line(&mut self) -> io::Result<()> {
        if self.ansi {
            self.line.push_str("\x1B[0m");
        }
        self.line.push('\n');
        self.out.write_all(self.line.as_bytes())?;
        self.line.clear();
        Ok(())
    }
}

/// Stable background colour for a cell colour; the default colour stays white.
pub fn palette_index(color: Color) -> u8 {
    if color == Color::WHITE {
        return 15;
    }
    // 6x6x6 cube starts at 16
    16 + ((color.ch() as u32).wrapping_mul(37) % 216) as u8
}

impl CanvasTarget for ConsoleTarget {
    type Error = io::Error;

    fn draw(&mut self, color: Color) -> io::Result<()> {
        if self.ansi {
            let bg = palette_index(color);
            let fg = if bg == 15 || bg >= 196 { 0 } else { 15 };
            self.line
                .push_str(&format!("\x1B[38;5;{}m\x1B[48;5;{}m{}", fg, bg, color.ch()));
        } else {
            self.line.push(color.ch());
        }
        Ok(())
    }

    fn next_line(&mut self) -> io::Result<()> {
        self.flush_line()
    }

    fn finish(&mut self) -> io::Result<()> {
        self.flush_line()?;
        self.out.flush()
    }
}
