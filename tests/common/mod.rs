#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

use sysplot::app::Pause;
use sysplot::error::SourceError;
use sysplot::system::snapshot::CpuSnapshot;
use sysplot::system::source::MetricSource;

/// Replays canned readings in order; an exhausted queue reads as a
/// malformed source.
#[derive(Default)]
pub struct ScriptedSource {
    pub total_gb: f64,
    pub free_kb: RefCell<VecDeque<u64>>,
    pub cpu: RefCell<VecDeque<CpuSnapshot>>,
    pub cores: usize,
    pub max_ghz: f64,
    pub cpu_reads: Cell<usize>,
    pub memory_reads: Cell<usize>,
}

impl ScriptedSource {
    pub fn new(total_gb: f64) -> Self {
        ScriptedSource {
            total_gb,
            cores: 4,
            max_ghz: 3.2,
            ..Default::default()
        }
    }

    pub fn with_free_kb(self, values: &[u64]) -> Self {
        *self.free_kb.borrow_mut() = values.iter().copied().collect();
        self
    }

    pub fn with_cpu(self, values: &[(u64, u64)]) -> Self {
        *self.cpu.borrow_mut() = values
            .iter()
            .map(|&(total, idle)| CpuSnapshot::new(total, idle))
            .collect();
        self
    }

    pub fn with_cores(mut self, cores: usize, max_ghz: f64) -> Self {
        self.cores = cores;
        self.max_ghz = max_ghz;
        self
    }
}

fn next<T>(queue: &RefCell<VecDeque<T>>, what: &str) -> Result<T, SourceError> {
    queue
        .borrow_mut()
        .pop_front()
        .ok_or_else(|| SourceError::malformed("scripted", format!("{what} exhausted")))
}

impl MetricSource for ScriptedSource {
    fn total_memory_gb(&self) -> Result<f64, SourceError> {
        Ok(self.total_gb)
    }

    fn free_memory_kb(&self) -> Result<u64, SourceError> {
        self.memory_reads.set(self.memory_reads.get() + 1);
        next(&self.free_kb, "free memory")
    }

    fn cpu_counters(&self) -> Result<CpuSnapshot, SourceError> {
        self.cpu_reads.set(self.cpu_reads.get() + 1);
        next(&self.cpu, "cpu counters")
    }

    fn core_count(&self) -> Result<usize, SourceError> {
        Ok(self.cores)
    }

    fn max_cpu_frequency_ghz(&self) -> Result<f64, SourceError> {
        Ok(self.max_ghz)
    }
}

#[derive(Default)]
pub struct RecordedPauses(pub Vec<Duration>);

impl Pause for RecordedPauses {
    fn pause(&mut self, duration: Duration) {
        self.0.push(duration);
    }
}

pub const GB_IN_KB: u64 = 1024 * 1024;
