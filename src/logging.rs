use std::fs::{self, File};
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::{Result, eyre};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

/// Sends JSON trace events and span timings to `output_path`.
///
/// The terminal is the drawing surface, so nothing is ever logged to
/// stdout or stderr; without a log file no subscriber is installed.
pub fn init_json_file(output_path: &Path, level: &str) -> Result<()> {
    ensure_parent_dir(output_path)?;
    let file = File::create(output_path)?;

    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .json()
        .with_span_events(FmtSpan::CLOSE)
        .with_max_level(parse_level(level))
        .with_writer(Mutex::new(file))
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| eyre!("failed to set tracing subscriber: {e}"))?;
    Ok(())
}

/// Unknown names fall back to `debug`.
pub fn parse_level(name: &str) -> Level {
    name.parse().unwrap_or(Level::DEBUG)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
