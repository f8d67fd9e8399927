use std::process::ExitCode;

use spork::cli::{CliArgs, USAGE};
use spork::config::{LoggingSettings, Settings};
use spork::{ProfileReader, SporkError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(settings: &LoggingSettings) {
    let filter = EnvFilter::try_new(&settings.level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if settings.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn main() -> ExitCode {
    // Argument count is checked before anything else can fail
    let args = match CliArgs::parse(std::env::args_os().skip(1)) {
        Ok(args) => args,
        Err(_) => {
            println!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            println!("{}", SporkError::from(e));
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging);

    let reader = match settings.input.max_profiles {
        Some(max) => ProfileReader::with_limit(max),
        None => ProfileReader::new(),
    };

    info!(criteria = ?args.criteria, "searching profiles");

    match spork::run(&reader, &args.input, &args.output, args.criteria) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = ?e, "run failed");
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}
