use std::io::Stdout;

use crate::{
    canvas::Canvas,
    command::Command,
    error::{EditorError, Result},
    target::{CanvasTarget, WriterTarget},
};

/// Owns one canvas and the target that `S` shows it on.
///
/// Commands either apply completely or fail without touching the canvas.
pub struct Editor<T: CanvasTarget> {
    canvas: Canvas,
    target: T,
}

impl Editor<WriterTarget<Stdout>> {
    /// An editor whose `S` command prints to stdout.
    ///
    /// ```
    /// # use pixed::Editor;
    /// let mut editor = Editor::new(3, 2)?;
    /// editor.execute("L 3 2 X")?;
    /// assert_eq!(editor.render(), "OOO\nOOX");
    /// assert!(Editor::new(0, 2).is_err());
    /// # Ok::<(), pixed::EditorError>(())
    /// ```
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_target(width, height, WriterTarget::stdout())
    }
}

impl<T: CanvasTarget> Editor<T> {
    pub fn with_target(width: usize, height: usize, target: T) -> Result<Self> {
        Ok(Self {
            canvas: Canvas::new(width, height)?,
            target,
        })
    }

    /// Parses and applies one command line, returning the editor for chaining.
    ///
    /// ```
    /// # use pixed::{Editor, test_support::MemoryTarget};
    /// let mut editor = Editor::with_target(5, 6, MemoryTarget::new()).unwrap();
    /// editor.execute("L 2 3 A")?.execute("H 1 5 1 Z")?;
    /// assert!(editor.render().starts_with("ZZZZZ\n"));
    /// # Ok::<(), pixed::EditorError>(())
    /// ```
    pub fn execute(&mut self, line: &str) -> Result<&mut Self> {
        let command = Command::parse(line)?;
        self.apply(&command)?;
        Ok(self)
    }

    pub fn apply(&mut self, command: &Command) -> Result<()> {
        tracing::debug!(%command, "apply");
        match *command {
            Command::Init { width, height } => {
                let invalid = EditorError::InvalidDimension { width, height };
                let width = usize::try_from(width).map_err(|_| invalid.clone())?;
                let height = usize::try_from(height).map_err(|_| invalid.clone())?;
                self.canvas = Canvas::new(width, height)?;
            }
            Command::Clear => self.canvas.clear(),
            Command::Pixel { x, y, color } => self.canvas.set_pixel(x, y, color)?,
            Command::Vertical { x, y1, y2, color } => {
                self.canvas.draw_vertical(x, y1, y2, color)?
            }
            Command::Horizontal { x1, x2, y, color } => {
                self.canvas.draw_horizontal(x1, x2, y, color)?
            }
            Command::Fill { x, y, color } => {
                self.canvas.flood_fill(x, y, color)?;
            }
            Command::Show => self.show()?,
            Command::Unknown(ref name) => {
                if !name.is_empty() {
                    tracing::warn!(command = %name, "ignoring unknown command");
                }
            }
        }
        Ok(())
    }

    /// Executes a multi-line script, skipping blank lines and `#` comments.
    ///
    /// Stops at the first failing line; the error carries no line number, use
    /// [`Editor::execute`] per line when that is needed.
    pub fn run_script(&mut self, script: &str) -> Result<&mut Self> {
        for line in script.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            self.execute(line)?;
        }
        Ok(self)
    }

    /// Emits the canvas to the display target.
    pub fn show(&mut self) -> Result<()> {
        self.canvas
            .render_to(&mut self.target)
            .map_err(|e| EditorError::Target(e.to_string()))
    }

    pub fn render(&self) -> String {
        self.canvas.render()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }
}
