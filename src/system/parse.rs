//! Parsers for the text expositions behind [`super::source::ProcSource`].
//!
//! Each parser takes the file contents and returns `None` when the expected
//! shape is missing; the caller attaches the path and turns that into a
//! [`crate::error::SourceError`].

use super::snapshot::CpuSnapshot;

/// Counters taken from the aggregate CPU line.
const MAX_CPU_FIELDS: usize = 10;
/// Position of the idle counter in `user nice system idle iowait ...`.
const IDLE_FIELD: usize = 3;

/// Value of the first `label value` record, in kB.
pub fn first_record_kb(contents: &str) -> Option<u64> {
    let mut tokens = contents.split_whitespace();
    tokens.next()?;
    tokens.next()?.parse().ok()
}

/// Value of the first line labelled exactly `MemFree:`, in kB.
///
/// Later `MemFree:` lines are never consulted, even when the first one has
/// no usable value.
pub fn mem_free_kb(contents: &str) -> Option<u64> {
    let mut tokens = contents
        .lines()
        .map(str::split_whitespace)
        .find_map(|mut tokens| (tokens.next() == Some("MemFree:")).then_some(tokens))?;
    tokens.next()?.parse().ok()
}

/// Sums the first ten digit runs of `line` and picks the fourth as idle time.
///
/// The line is expected to be a non-numeric label followed by counters in
/// kernel order. Digits inside the label (`cpu0`) or a short line still
/// produce a snapshot, just a meaningless one.
pub fn cpu_line(line: &str) -> CpuSnapshot {
    let mut snapshot = CpuSnapshot::default();
    let bytes = line.as_bytes();
    let mut pos = 0;
    let mut fields = 0;

    while pos < bytes.len() && fields < MAX_CPU_FIELDS {
        if !bytes[pos].is_ascii_digit() {
            pos += 1;
            continue;
        }
        let start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        let value = line[start..pos].parse::<u64>().unwrap_or(u64::MAX);
        snapshot.total = snapshot.total.saturating_add(value);
        if fields == IDLE_FIELD {
            snapshot.idle = value;
        }
        fields += 1;
    }

    snapshot
}

/// Leading integer of a single-value sysfs file.
pub fn single_integer(contents: &str) -> Option<u64> {
    contents.split_whitespace().next()?.parse().ok()
}
