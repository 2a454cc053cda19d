use std::ffi::OsString;
use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command, CommandFactory, FromArgMatches, Parser};

use crate::config::{GeneralConfig, SampleConfig, Tracks};
use crate::error::ArgumentError;

#[derive(Parser, Debug)]
#[command(
    name = "sysplot",
    version,
    about = "Live terminal graphs of memory usage, CPU utilization and cores"
)]
pub struct Cli {
    /// Number of samples to take
    #[arg(value_name = "SAMPLES")]
    pub samples: Option<u32>,

    /// Delay between samples in microseconds
    #[arg(value_name = "TDELAY")]
    pub tdelay: Option<u64>,

    /// Graph memory usage
    #[arg(long, action = ArgAction::Count)]
    pub memory: u8,

    /// Graph CPU utilization
    #[arg(long, action = ArgAction::Count)]
    pub cpu: u8,

    /// Show core count and maximum frequency
    #[arg(long, action = ArgAction::Count)]
    pub cores: u8,

    /// Number of samples, when not given positionally
    #[arg(long = "samples", value_name = "N", require_equals = true, overrides_with = "samples_flag")]
    pub samples_flag: Option<u32>,

    /// Delay in microseconds, when not given positionally
    #[arg(long = "tdelay", value_name = "N", require_equals = true, overrides_with = "tdelay_flag")]
    pub tdelay_flag: Option<u64>,

    /// Path to config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write JSON trace events to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Checks flag usage and fills unset values from `defaults`.
    pub fn resolve(&self, defaults: &GeneralConfig) -> Result<SampleConfig, ArgumentError> {
        for (count, flag) in [
            (self.memory, "--memory"),
            (self.cpu, "--cpu"),
            (self.cores, "--cores"),
        ] {
            if count > 1 {
                return Err(ArgumentError::Duplicate(flag));
            }
        }

        let samples = positional_or_flag(self.samples, self.samples_flag, "samples")?
            .unwrap_or(defaults.samples);
        let tdelay = positional_or_flag(self.tdelay, self.tdelay_flag, "tdelay")?
            .unwrap_or(defaults.tdelay_us);

        let tracks = Tracks {
            memory: self.memory > 0,
            cpu: self.cpu > 0,
            cores: self.cores > 0,
        };
        SampleConfig::new(samples, tdelay, tracks)
    }
}

fn positional_or_flag<T>(
    positional: Option<T>,
    flag: Option<T>,
    name: &'static str,
) -> Result<Option<T>, ArgumentError> {
    match (positional, flag) {
        (Some(_), Some(_)) => Err(ArgumentError::PositionalConflict(name)),
        (positional, flag) => Ok(positional.or(flag)),
    }
}

/// Parses `args` (program name first) without exiting on failure.
///
/// Positionals are only accepted ahead of every flag.
pub fn parse_from<I, T>(args: I) -> Result<Cli, ArgumentError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let command = Cli::command();
    let matches = command.clone().try_get_matches_from(args)?;
    reject_positionals_after_flags(&command, &matches)?;
    Ok(Cli::from_arg_matches(&matches)?)
}

fn reject_positionals_after_flags(
    command: &Command,
    matches: &ArgMatches,
) -> Result<(), ArgumentError> {
    let (positionals, flags): (Vec<&Arg>, Vec<&Arg>) =
        command.get_arguments().partition(|arg| arg.is_positional());

    let first_flag = flags
        .iter()
        .map(|arg| arg.get_id().as_str())
        .filter(|id| matches.value_source(id) == Some(ValueSource::CommandLine))
        .filter_map(|id| matches.indices_of(id))
        .flatten()
        .min();
    let Some(first_flag) = first_flag else {
        return Ok(());
    };

    for id in positionals.iter().map(|arg| arg.get_id().as_str()) {
        if let Some(index) = matches.index_of(id)
            && index > first_flag
        {
            let token = matches
                .get_raw(id)
                .and_then(|mut raw| raw.next())
                .map(|raw| raw.to_string_lossy().into_owned())
                .unwrap_or_default();
            return Err(ArgumentError::Unrecognized(token));
        }
    }
    Ok(())
}
