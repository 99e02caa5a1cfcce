//! Terminal rendering of finished generations.

use std::io::{self, Write};

use crossterm::cursor;
use crossterm::queue;
use crossterm::style::{self, Color};
use crossterm::terminal;

use crate::compute::Grid;

/// Receives each fully computed generation for display.
pub trait RenderSink {
    fn render(&mut self, generation: u64, grid: &Grid) -> io::Result<()>;
}

/// Prints live cells as a green `1` and dead cells as a grey `0`.
pub struct TerminalRenderer<W: Write> {
    out: W,
    /// Clear the screen and home the cursor before each frame.
    clear: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, clear: true }
    }

    /// Append frames instead of redrawing in place.
    pub fn without_clear(mut self) -> Self {
        self.clear = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for TerminalRenderer<W> {
    fn render(&mut self, generation: u64, grid: &Grid) -> io::Result<()> {
        log::trace!("rendering generation {generation}");

        if self.clear {
            queue!(
                self.out,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0)
            )?;
        }

        for row in grid.rows() {
            for &cell in row {
                let color = if cell.is_alive() {
                    Color::Green
                } else {
                    Color::Grey
                };
                queue!(
                    self.out,
                    style::SetForegroundColor(color),
                    style::Print(format!(" {}", u8::from(cell))),
                    style::ResetColor
                )?;
            }
            queue!(self.out, style::Print("\n"))?;
        }

        self.out.flush()
    }
}
