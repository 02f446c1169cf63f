//! Parsing of single command lines.
use std::{fmt, str::FromStr};

use crate::{
    error::{EditorError, Result},
    Color,
};

/// One parsed command line.
///
/// Coordinates are kept exactly as written (1-based, possibly out of range);
/// range checks happen against the canvas when the command is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// `I M N`
    Init { width: i64, height: i64 },
    /// `C`
    Clear,
    /// `L X Y C`
    Pixel { x: i64, y: i64, color: Color },
    /// `V X Y1 Y2 C`
    Vertical { x: i64, y1: i64, y2: i64, color: Color },
    /// `H X1 X2 Y C`
    Horizontal { x1: i64, x2: i64, y: i64, color: Color },
    /// `F X Y C`
    Fill { x: i64, y: i64, color: Color },
    /// `S`
    Show,
    /// Any other leading token, or an empty line. Applying it does nothing.
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(Command::Unknown(String::new()));
        };
        let args: Vec<&str> = tokens.collect();
        let args = Args { line, args: &args };

        let cmd = match name {
            "I" => {
                args.expect_len(2)?;
                Command::Init {
                    width: args.int(0)?,
                    height: args.int(1)?,
                }
            }
            "C" => {
                args.expect_len(0)?;
                Command::Clear
            }
            "L" => {
                args.expect_len(3)?;
                Command::Pixel {
                    x: args.int(0)?,
                    y: args.int(1)?,
                    color: args.color(2)?,
                }
            }
            "V" => {
                args.expect_len(4)?;
                Command::Vertical {
                    x: args.int(0)?,
                    y1: args.int(1)?,
                    y2: args.int(2)?,
                    color: args.color(3)?,
                }
            }
            "H" => {
                args.expect_len(4)?;
                Command::Horizontal {
                    x1: args.int(0)?,
                    x2: args.int(1)?,
                    y: args.int(2)?,
                    color: args.color(3)?,
                }
            }
            "F" => {
                args.expect_len(3)?;
                Command::Fill {
                    x: args.int(0)?,
                    y: args.int(1)?,
                    color: args.color(2)?,
                }
            }
            "S" => {
                args.expect_len(0)?;
                Command::Show
            }
            other => Command::Unknown(other.to_string()),
        };
        Ok(cmd)
    }
}

impl FromStr for Command {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self> {
        Command::parse(s)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Init { width, height } => write!(f, "I {width} {height}"),
            Command::Clear => write!(f, "C"),
            Command::Pixel { x, y, color } => write!(f, "L {x} {y} {color}"),
            Command::Vertical { x, y1, y2, color } => write!(f, "V {x} {y1} {y2} {color}"),
            Command::Horizontal { x1, x2, y, color } => write!(f, "H {x1} {x2} {y} {color}"),
            Command::Fill { x, y, color } => write!(f, "F {x} {y} {color}"),
            Command::Show => write!(f, "S"),
            Command::Unknown(name) => write!(f, "{name}"),
        }
    }
}

struct Args<'a> {
    line: &'a str,
    args: &'a [&'a str],
}

impl Args<'_> {
    fn expect_len(&self, n: usize) -> Result<()> {
        if self.args.len() != n {
            return Err(EditorError::malformed(
                self.line.trim(),
                format!("expected {n} arguments, got {}", self.args.len()),
            ));
        }
        Ok(())
    }

    fn int(&self, i: usize) -> Result<i64> {
        let tok = self.args[i];
        tok.parse().map_err(|_| {
            EditorError::malformed(self.line.trim(), format!("'{tok}' is not an integer"))
        })
    }

    fn color(&self, i: usize) -> Result<Color> {
        let tok = self.args[i];
        tok.parse().map_err(|_| {
            EditorError::malformed(
                self.line.trim(),
                format!("color '{tok}' must be a single character"),
            )
        })
    }
}
