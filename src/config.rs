use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ArgumentError;
use crate::system::source::{DEFAULT_MAX_FREQ, DEFAULT_MEMINFO, DEFAULT_STAT, SourcePaths};

pub const DEFAULT_SAMPLES: u32 = 20;
pub const DEFAULT_TDELAY_US: u64 = 500_000;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub sources: SourcesConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub samples: u32,
    pub tdelay_us: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            samples: DEFAULT_SAMPLES,
            tdelay_us: DEFAULT_TDELAY_US,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub meminfo: PathBuf,
    pub stat: PathBuf,
    pub max_freq: PathBuf,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        SourcesConfig {
            meminfo: PathBuf::from(DEFAULT_MEMINFO),
            stat: PathBuf::from(DEFAULT_STAT),
            max_freq: PathBuf::from(DEFAULT_MAX_FREQ),
        }
    }
}

impl SourcesConfig {
    pub fn to_paths(&self) -> SourcePaths {
        SourcePaths {
            meminfo: self.meminfo.clone(),
            stat: self.stat.clone(),
            max_freq: self.max_freq.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub file: Option<PathBuf>,
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: None,
            level: "debug".to_string(),
        }
    }
}

/// Which parts of the display a run produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tracks {
    pub memory: bool,
    pub cpu: bool,
    pub cores: bool,
}

impl Tracks {
    pub const ALL: Tracks = Tracks {
        memory: true,
        cpu: true,
        cores: true,
    };

    /// Asking for nothing means asking for everything.
    pub fn or_all(self) -> Self {
        if self.memory || self.cpu || self.cores {
            self
        } else {
            Tracks::ALL
        }
    }
}

/// Resolved parameters of one run. Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleConfig {
    samples: u32,
    interval_micros: u64,
    tracks: Tracks,
}

impl SampleConfig {
    pub fn new(samples: u32, interval_micros: u64, tracks: Tracks) -> Result<Self, ArgumentError> {
        if samples == 0 {
            return Err(ArgumentError::NotPositive("samples"));
        }
        if interval_micros == 0 {
            return Err(ArgumentError::NotPositive("tdelay"));
        }
        Ok(SampleConfig {
            samples,
            interval_micros,
            tracks: tracks.or_all(),
        })
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }

    pub fn interval_micros(&self) -> u64 {
        self.interval_micros
    }

    pub fn interval(&self) -> Duration {
        Duration::from_micros(self.interval_micros)
    }

    pub fn show_memory(&self) -> bool {
        self.tracks.memory
    }

    pub fn show_cpu(&self) -> bool {
        self.tracks.cpu
    }

    pub fn show_cores(&self) -> bool {
        self.tracks.cores
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sysplot").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}
