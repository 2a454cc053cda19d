pub mod axis;
pub mod cores;
pub mod grid;
pub mod layout;
pub mod terminal;

use std::fmt;
use std::io;

use crate::format::{banner, cpu_readout, memory_readout};
use axis::Axis;
use layout::{Cell, cpu_sample_row, memory_sample_row, sample_column};

pub const MEMORY_GLYPH: char = '#';
pub const CPU_GLYPH: char = '$';

/// Current value shown on a track's readout line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Readout {
    Memory { used_gb: f64 },
    Cpu { percent: f64 },
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Readout::Memory { used_gb } => f.write_str(&memory_readout(used_gb)),
            Readout::Cpu { percent } => f.write_str(&cpu_readout(percent)),
        }
    }
}

/// A terminal-like surface addressed with absolute 1-based cells.
///
/// Implementors provide the primitives; the graph operations are built on
/// top of them so the sample loop never emits escape sequences itself.
pub trait Canvas {
    /// Writes at the cursor and advances it, `\n` moving to column 1 of the
    /// next row.
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    /// Writes one glyph at `cell`, leaving every other cell untouched.
    fn put_glyph(&mut self, cell: Cell, glyph: char) -> io::Result<()>;

    /// Clears `row` and writes `text` from column 1.
    fn rewrite_line(&mut self, row: u16, text: &str) -> io::Result<()>;

    /// Clears the screen and homes the cursor.
    fn clear_screen(&mut self) -> io::Result<()>;

    /// Moves the cursor to column 1 of `row`.
    fn park_cursor(&mut self, row: u16) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;

    fn draw_banner(&mut self, samples: u32, interval_micros: u64) -> io::Result<()> {
        self.clear_screen()?;
        self.write_text("\n")?;
        self.write_text(&banner(samples, interval_micros))?;
        self.write_text("\n\n")
    }

    fn draw_axis_skeleton(&mut self, axis: Axis, samples: u32) -> io::Result<()> {
        self.write_text(&axis::skeleton(axis, samples))
    }

    fn place_memory_sample(&mut self, total_gb: f64, used_gb: f64, index: u32) -> io::Result<Cell> {
        let cell = Cell::clamped(memory_sample_row(total_gb, used_gb), sample_column(index));
        self.put_glyph(cell, MEMORY_GLYPH)?;
        Ok(cell)
    }

    fn place_cpu_sample(&mut self, percent: f64, index: u32, baseline_row: i32) -> io::Result<Cell> {
        let cell = Cell::clamped(cpu_sample_row(percent, baseline_row), sample_column(index));
        self.put_glyph(cell, CPU_GLYPH)?;
        Ok(cell)
    }

    fn print_live_value(&mut self, row: u16, readout: Readout) -> io::Result<()> {
        self.rewrite_line(row, &readout.to_string())
    }

    fn draw_core_diagram(&mut self, cores: usize) -> io::Result<()> {
        self.write_text(&cores::core_diagram(cores))
    }
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        (**self).write_text(text)
    }

    fn put_glyph(&mut self, cell: Cell, glyph: char) -> io::Result<()> {
        (**self).put_glyph(cell, glyph)
    }

    fn rewrite_line(&mut self, row: u16, text: &str) -> io::Result<()> {
        (**self).rewrite_line(row, text)
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        (**self).clear_screen()
    }

    fn park_cursor(&mut self, row: u16) -> io::Result<()> {
        (**self).park_cursor(row)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}
