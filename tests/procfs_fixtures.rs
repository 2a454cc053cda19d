use std::fs;
use std::path::Path;

use approx::assert_relative_eq;
use sysplot::error::SourceError;
use sysplot::system::snapshot::CpuSnapshot;
use sysplot::system::source::{MetricSource, ProcSource, SourcePaths};
use tempfile::TempDir;

const MEMINFO: &str = "\
MemTotal:       16777216 kB
MemFree:         4194304 kB
MemAvailable:    8388608 kB
Buffers:          123456 kB
";

const STAT: &str = "\
cpu  4705 150 1120 16250 520 0 33 0 0 0
cpu0 1393 49 325 4058 128 0 22 0 0 0
intr 114930548 113199788 3 0 5 263 0 4 [... lots more numbers ...]
";

fn fixture(meminfo: &str, stat: &str, max_freq: &str) -> (TempDir, ProcSource) {
    let dir = tempfile::tempdir().unwrap();
    let write = |name: &str, contents: &str| {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    };
    let paths = SourcePaths {
        meminfo: write("meminfo", meminfo),
        stat: write("stat", stat),
        max_freq: write("cpuinfo_max_freq", max_freq),
    };
    (dir, ProcSource::new(paths))
}

#[test]
fn reads_memory_totals_in_gigabytes() {
    let (_dir, source) = fixture(MEMINFO, STAT, "3600000\n");
    assert_relative_eq!(source.total_memory_gb().unwrap(), 16.0);
    assert_eq!(source.free_memory_kb().unwrap(), 4_194_304);
}

#[test]
fn reads_aggregate_cpu_line_only() {
    let (_dir, source) = fixture(MEMINFO, STAT, "3600000\n");
    let snapshot = source.cpu_counters().unwrap();
    assert_eq!(
        snapshot,
        CpuSnapshot::new(4705 + 150 + 1120 + 16250 + 520 + 33, 16250)
    );
}

#[test]
fn reads_max_frequency_in_ghz() {
    let (_dir, source) = fixture(MEMINFO, STAT, "3600000\n");
    assert_relative_eq!(source.max_cpu_frequency_ghz().unwrap(), 3.6);
}

#[test]
fn files_are_reopened_on_every_read() {
    let (dir, source) = fixture(MEMINFO, STAT, "3600000\n");
    assert_eq!(source.free_memory_kb().unwrap(), 4_194_304);

    fs::write(
        dir.path().join("meminfo"),
        "MemTotal: 16777216 kB\nMemFree: 1024 kB\n",
    )
    .unwrap();
    assert_eq!(source.free_memory_kb().unwrap(), 1024);
}

#[test]
fn malformed_files_are_errors() {
    let (_dir, source) = fixture("garbage", "", "fast\n");
    assert!(matches!(
        source.total_memory_gb(),
        Err(SourceError::Malformed { .. })
    ));
    assert!(matches!(
        source.free_memory_kb(),
        Err(SourceError::Malformed { .. })
    ));
    assert!(matches!(
        source.cpu_counters(),
        Err(SourceError::Malformed { .. })
    ));
    assert!(matches!(
        source.max_cpu_frequency_ghz(),
        Err(SourceError::Malformed { .. })
    ));
}

#[test]
fn errors_name_the_file() {
    let (dir, source) = fixture(MEMINFO, "", "1\n");
    let err = source.cpu_counters().unwrap_err();
    let expected = dir.path().join("stat");
    assert!(err.to_string().contains(&*expected.to_string_lossy()));
}

#[test]
fn missing_file_is_open_error() {
    let source = ProcSource::new(SourcePaths {
        meminfo: Path::new("/nonexistent/meminfo").to_path_buf(),
        ..SourcePaths::default()
    });
    assert!(matches!(
        source.free_memory_kb(),
        Err(SourceError::Open { .. })
    ));
}

#[test]
fn blank_first_stat_line_reads_as_zero_counters() {
    let (_dir, source) = fixture(MEMINFO, "   \ncpu  1 2 3 4\n", "1\n");
    assert_eq!(source.cpu_counters().unwrap(), CpuSnapshot::default());
}
