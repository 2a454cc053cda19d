use std::io;

use super::Canvas;
use super::layout::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub cell: Cell,
    pub glyph: char,
}

/// In-memory terminal emulation: a growable character grid with a cursor.
///
/// Every `put_glyph` is also logged, so a run can be checked both as a
/// rendered screen and as a list of `(row, column, glyph)` placements.
#[derive(Clone, Debug)]
pub struct GridCanvas {
    rows: Vec<Vec<char>>,
    cursor: Cell,
    placements: Vec<Placement>,
    flushes: usize,
}

impl Default for GridCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl GridCanvas {
    pub fn new() -> Self {
        GridCanvas {
            rows: Vec::new(),
            cursor: Cell { row: 1, col: 1 },
            placements: Vec::new(),
            flushes: 0,
        }
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    pub fn glyph_at(&self, cell: Cell) -> Option<char> {
        let row = self.rows.get(usize::from(cell.row).checked_sub(1)?)?;
        row.get(usize::from(cell.col).checked_sub(1)?)
            .copied()
            .filter(|&c| c != ' ')
    }

    /// Text of `row` without trailing blanks; empty for rows never written.
    pub fn row_text(&self, row: u16) -> String {
        usize::from(row)
            .checked_sub(1)
            .and_then(|idx| self.rows.get(idx))
            .map(|cells| cells.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }

    /// The whole screen, one line per row, trailing blanks trimmed.
    pub fn render(&self) -> String {
        (1..=self.rows.len() as u16)
            .map(|row| self.row_text(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn set(&mut self, cell: Cell, ch: char) {
        let (r, c) = (usize::from(cell.row.max(1)) - 1, usize::from(cell.col.max(1)) - 1);
        if self.rows.len() <= r {
            self.rows.resize_with(r + 1, Vec::new);
        }
        let row = &mut self.rows[r];
        if row.len() <= c {
            row.resize(c + 1, ' ');
        }
        row[c] = ch;
    }
}

impl Canvas for GridCanvas {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        for ch in text.chars() {
            if ch == '\n' {
                self.cursor = Cell {
                    row: self.cursor.row.saturating_add(1),
                    col: 1,
                };
            } else {
                self.set(self.cursor, ch);
                self.cursor.col = self.cursor.col.saturating_add(1);
            }
        }
        Ok(())
    }

    fn put_glyph(&mut self, cell: Cell, glyph: char) -> io::Result<()> {
        self.set(cell, glyph);
        self.placements.push(Placement { cell, glyph });
        self.cursor = Cell {
            row: cell.row,
            col: cell.col.saturating_add(1),
        };
        Ok(())
    }

    fn rewrite_line(&mut self, row: u16, text: &str) -> io::Result<()> {
        if let Some(cells) = usize::from(row)
            .checked_sub(1)
            .and_then(|idx| self.rows.get_mut(idx))
        {
            cells.clear();
        }
        self.cursor = Cell { row, col: 1 };
        self.write_text(text)
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        self.rows.clear();
        self.cursor = Cell { row: 1, col: 1 };
        Ok(())
    }

    fn park_cursor(&mut self, row: u16) -> io::Result<()> {
        self.cursor = Cell { row, col: 1 };
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
