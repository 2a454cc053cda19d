use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use sysinfo::{CpuRefreshKind, RefreshKind, System};

use super::parse;
use super::snapshot::CpuSnapshot;
use crate::error::SourceError;
use crate::format::{kb_to_gb, khz_to_ghz};

pub const DEFAULT_MEMINFO: &str = "/proc/meminfo";
pub const DEFAULT_STAT: &str = "/proc/stat";
pub const DEFAULT_MAX_FREQ: &str = "/sys/devices/system/cpu/cpu0/cpufreq/cpuinfo_max_freq";

/// Raw host counters. Every call is a fresh, synchronous read.
pub trait MetricSource {
    fn total_memory_gb(&self) -> Result<f64, SourceError>;
    fn free_memory_kb(&self) -> Result<u64, SourceError>;
    fn cpu_counters(&self) -> Result<CpuSnapshot, SourceError>;
    fn core_count(&self) -> Result<usize, SourceError>;
    fn max_cpu_frequency_ghz(&self) -> Result<f64, SourceError>;
}

impl<S: MetricSource + ?Sized> MetricSource for &S {
    fn total_memory_gb(&self) -> Result<f64, SourceError> {
        (**self).total_memory_gb()
    }

    fn free_memory_kb(&self) -> Result<u64, SourceError> {
        (**self).free_memory_kb()
    }

    fn cpu_counters(&self) -> Result<CpuSnapshot, SourceError> {
        (**self).cpu_counters()
    }

    fn core_count(&self) -> Result<usize, SourceError> {
        (**self).core_count()
    }

    fn max_cpu_frequency_ghz(&self) -> Result<f64, SourceError> {
        (**self).max_cpu_frequency_ghz()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourcePaths {
    pub meminfo: PathBuf,
    pub stat: PathBuf,
    pub max_freq: PathBuf,
}

impl Default for SourcePaths {
    fn default() -> Self {
        SourcePaths {
            meminfo: PathBuf::from(DEFAULT_MEMINFO),
            stat: PathBuf::from(DEFAULT_STAT),
            max_freq: PathBuf::from(DEFAULT_MAX_FREQ),
        }
    }
}

/// Reads procfs/sysfs style text files. No handles are kept between calls.
#[derive(Clone, Debug, Default)]
pub struct ProcSource {
    paths: SourcePaths,
}

impl ProcSource {
    pub fn new(paths: SourcePaths) -> Self {
        ProcSource { paths }
    }

    pub fn paths(&self) -> &SourcePaths {
        &self.paths
    }
}

impl MetricSource for ProcSource {
    fn total_memory_gb(&self) -> Result<f64, SourceError> {
        let path = &self.paths.meminfo;
        let contents = read_all(path)?;
        let kb = parse::first_record_kb(&contents)
            .ok_or_else(|| SourceError::malformed(path, "first record is not `label value`"))?;
        tracing::debug!(path = %path.display(), kb, "read total memory");
        Ok(kb_to_gb(kb))
    }

    fn free_memory_kb(&self) -> Result<u64, SourceError> {
        let path = &self.paths.meminfo;
        let contents = read_all(path)?;
        let kb = parse::mem_free_kb(&contents)
            .ok_or_else(|| SourceError::malformed(path, "no MemFree: record"))?;
        tracing::debug!(kb, "read free memory");
        Ok(kb)
    }

    fn cpu_counters(&self) -> Result<CpuSnapshot, SourceError> {
        let path = &self.paths.stat;
        let line = read_first_line(path)?;
        if line.is_empty() {
            return Err(SourceError::malformed(path, "empty file"));
        }
        let snapshot = parse::cpu_line(&line);
        tracing::debug!(total = snapshot.total, idle = snapshot.idle, "read cpu counters");
        Ok(snapshot)
    }

    fn core_count(&self) -> Result<usize, SourceError> {
        let sys =
            System::new_with_specifics(RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing()));
        match sys.cpus().len() {
            0 => Err(SourceError::NoProcessors),
            n => Ok(n),
        }
    }

    fn max_cpu_frequency_ghz(&self) -> Result<f64, SourceError> {
        let path = &self.paths.max_freq;
        let contents = read_all(path)?;
        let khz = parse::single_integer(&contents)
            .ok_or_else(|| SourceError::malformed(path, "expected a frequency in kHz"))?;
        Ok(khz_to_ghz(khz))
    }
}

fn open(path: &Path) -> Result<File, SourceError> {
    File::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })
}

fn read_all(path: &Path) -> Result<String, SourceError> {
    let mut contents = String::new();
    open(path)?
        .read_to_string(&mut contents)
        .map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(contents)
}

fn read_first_line(path: &Path) -> Result<String, SourceError> {
    let mut line = String::new();
    BufReader::new(open(path)?)
        .read_line(&mut line)
        .map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(line)
}
