use color_eyre::Result;

use sysplot::app::{Sampler, ThreadSleep};
use sysplot::cli::{Cli, parse_from};
use sysplot::config::{self, load_config, load_config_from_path};
use sysplot::error::ArgumentError;
use sysplot::logging;
use sysplot::summary;
use sysplot::system::source::ProcSource;
use sysplot::ui::terminal::AnsiCanvas;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = match parse_from(std::env::args_os()) {
        Ok(cli) => cli,
        // --help and --version
        Err(ArgumentError::Cli(err)) if !err.use_stderr() => err.exit(),
        Err(err) => exit_with_argument_error(&err),
    };
    let config = load_config_for_cli(&cli);
    let sample_config = match cli.resolve(&config.general) {
        Ok(sample_config) => sample_config,
        Err(err) => exit_with_argument_error(&err),
    };

    if let Some(path) = cli.log_file.as_ref().or(config.log.file.as_ref()) {
        logging::init_json_file(path, &config.log.level)?;
    }

    let source = ProcSource::new(config.sources.to_paths());
    let mut canvas = AnsiCanvas::stdout();

    Sampler::new(sample_config, &source, &mut canvas, ThreadSleep).run()?;
    summary::report(&sample_config, &source, &mut canvas)?;

    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> config::Config {
    match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    }
}

fn exit_with_argument_error(err: &ArgumentError) -> ! {
    match err {
        ArgumentError::Cli(clap_err) => eprint!("{clap_err}"),
        other => eprintln!("Error: {other}"),
    }
    std::process::exit(1);
}
