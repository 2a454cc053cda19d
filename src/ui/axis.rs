use std::fmt::Write;

const MEMORY_TICK_ROWS: usize = 11;
const CPU_TICK_ROWS: usize = 9;
const TICK: &str = "       |";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Axis {
    Memory { total_gb: f64 },
    Cpu,
}

/// Static frame for one track: top label, tick column, `0` label and a
/// horizontal rule one character longer than the number of samples.
pub fn skeleton(axis: Axis, samples: u32) -> String {
    let mut out = String::from("\n");

    let (top, ticks, bottom) = match axis {
        Axis::Memory { total_gb } => (format!("{total_gb:3.0} GB |"), MEMORY_TICK_ROWS, "  0 GB "),
        Axis::Cpu => (" 100%  |".to_string(), CPU_TICK_ROWS, "   0%  "),
    };

    let _ = writeln!(out, "{top}");
    for _ in 0..ticks {
        let _ = writeln!(out, "{TICK}");
    }
    out.push_str(bottom);
    out.push_str(&horizontal_rule(samples));
    out.push_str("\n\n\n");
    out
}

pub fn horizontal_rule(samples: u32) -> String {
    "_".repeat(samples as usize + 1)
}
