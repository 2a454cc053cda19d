/// Cumulative CPU time counters from one read of the CPU statistics file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpuSnapshot {
    pub total: u64,
    pub idle: u64,
}

impl CpuSnapshot {
    pub fn new(total: u64, idle: u64) -> Self {
        Self { total, idle }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MemorySnapshot {
    pub total_gb: f64,
    pub used_gb: f64,
}
