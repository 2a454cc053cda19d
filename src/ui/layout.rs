//! Fixed row geometry of the graph frame.
//!
//! Everything here is measured in 1-based terminal rows and assumes the
//! frame is drawn from a cleared screen: banner first, then the memory
//! block, then the CPU block.

/// Columns taken by the axis labels; sample `i` lands in column `9 + i`.
pub const GLYPH_COLUMN_OFFSET: u16 = 9;

pub const MEMORY_READOUT_ROW: u16 = 4;
/// Row of a 0 GB memory sample.
pub const MEMORY_BASELINE_ROW: i32 = 17;
/// Rows between an empty and a full memory sample.
pub const MEMORY_SPAN_ROWS: f64 = 12.0;

const CPU_ONLY_READOUT_ROW: u16 = 4;
const CPU_ONLY_BASELINE_ROW: i32 = 14;
const STACKED_CPU_READOUT_ROW: u16 = 20;
const STACKED_CPU_BASELINE_ROW: i32 = 31;

/// Rows consumed by the banner; the cursor sits on the next one afterwards.
pub const BANNER_ROWS: u16 = 3;
/// Separator line plus the memory axis skeleton.
pub const MEMORY_BLOCK_ROWS: u16 = 17;
/// CPU axis skeleton plus the trailing blank line.
pub const CPU_BLOCK_ROWS: u16 = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphLayout {
    pub cpu_readout_row: u16,
    pub cpu_baseline_row: i32,
    /// First row below everything drawn before sampling started.
    pub end_row: u16,
}

impl GraphLayout {
    pub fn new(show_memory: bool, show_cpu: bool) -> Self {
        let (cpu_readout_row, cpu_baseline_row) = if show_memory && show_cpu {
            (STACKED_CPU_READOUT_ROW, STACKED_CPU_BASELINE_ROW)
        } else {
            (CPU_ONLY_READOUT_ROW, CPU_ONLY_BASELINE_ROW)
        };

        let mut end_row = BANNER_ROWS + 1;
        if show_memory {
            end_row += MEMORY_BLOCK_ROWS;
        }
        if show_cpu {
            end_row += CPU_BLOCK_ROWS;
        }

        GraphLayout {
            cpu_readout_row,
            cpu_baseline_row,
            end_row,
        }
    }
}

/// An absolute 1-based terminal position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: u16,
    pub col: u16,
}

impl Cell {
    /// Rows above the top of the screen are pinned to row 1.
    pub fn clamped(row: i32, col: u32) -> Self {
        Cell {
            row: row.clamp(1, i32::from(u16::MAX)) as u16,
            col: u16::try_from(col).unwrap_or(u16::MAX),
        }
    }
}

pub fn sample_column(index: u32) -> u32 {
    u32::from(GLYPH_COLUMN_OFFSET) + index
}

pub fn memory_sample_row(total_gb: f64, used_gb: f64) -> i32 {
    MEMORY_BASELINE_ROW - ((used_gb / total_gb) * MEMORY_SPAN_ROWS).round() as i32
}

pub fn cpu_sample_row(percent: f64, baseline_row: i32) -> i32 {
    baseline_row - (percent / 10.0).round() as i32
}
