//! Pure conversions from raw counters to plotted values.

use crate::format::kb_to_gb;
use crate::system::snapshot::CpuSnapshot;

/// One metric's per-tick step: fold a raw reading into the carried state and
/// produce the value to present.
pub trait Deriver {
    type State;
    type Raw;

    fn derive(&self, prev: &Self::State, raw: Self::Raw) -> (Self::State, f64);
}

/// Used memory from a fresh `MemFree` reading. Carries no state across ticks.
#[derive(Clone, Copy, Debug)]
pub struct MemoryDeriver {
    pub total_gb: f64,
}

impl Deriver for MemoryDeriver {
    type State = ();
    type Raw = u64;

    fn derive(&self, _prev: &(), free_kb: u64) -> ((), f64) {
        ((), memory_used_gb(self.total_gb, free_kb))
    }
}

/// Utilization between the previous and the current counter snapshot.
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuDeriver;

impl Deriver for CpuDeriver {
    type State = CpuSnapshot;
    type Raw = CpuSnapshot;

    fn derive(&self, prev: &CpuSnapshot, current: CpuSnapshot) -> (CpuSnapshot, f64) {
        (current, cpu_utilization_percent(prev, &current))
    }
}

pub fn memory_used_gb(total_gb: f64, free_kb: u64) -> f64 {
    total_gb - kb_to_gb(free_kb)
}

/// `100 * (1 - idle_delta / total_delta)`, or `0.0` when no time elapsed.
///
/// Deltas are signed: counters that move backwards give an out-of-range
/// percentage rather than a panic.
pub fn cpu_utilization_percent(prev: &CpuSnapshot, current: &CpuSnapshot) -> f64 {
    let total_delta = current.total.wrapping_sub(prev.total) as i64;
    let idle_delta = current.idle.wrapping_sub(prev.idle) as i64;

    if total_delta == 0 {
        return 0.0;
    }
    (1.0 - idle_delta as f64 / total_delta as f64) * 100.0
}
