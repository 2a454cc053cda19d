use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use super::Canvas;
use super::layout::Cell;

/// Draws straight onto a terminal with ANSI cursor addressing.
///
/// No alternate screen and no raw mode: the frame stays in the scrollback
/// once the process exits.
pub struct AnsiCanvas<W: Write> {
    out: W,
}

impl AnsiCanvas<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AnsiCanvas<W> {
    pub fn new(out: W) -> Self {
        AnsiCanvas { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Canvas for AnsiCanvas<W> {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))
    }

    fn put_glyph(&mut self, cell: Cell, glyph: char) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(cell.col.saturating_sub(1), cell.row.saturating_sub(1)),
            Print(glyph)
        )
    }

    fn rewrite_line(&mut self, row: u16, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(0, row.saturating_sub(1)),
            Clear(ClearType::UntilNewLine),
            Print(text)
        )
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::FromCursorDown))
    }

    fn park_cursor(&mut self, row: u16) -> io::Result<()> {
        queue!(self.out, MoveTo(0, row.saturating_sub(1)))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
