use clap::Parser;

use filesig::cli::{self, Cli};
use filesig::config::{CONFIG, DEFAULT_LOG_LEVEL};

fn main() {
    // A broken config should not stop one-shot checks; fall back to defaults
    let log_level = match CONFIG.as_ref() {
        Ok(config) => config.log_level.clone(),
        Err(e) => {
            eprintln!("Warning: failed to load configuration: {}", e);
            DEFAULT_LOG_LEVEL.to_string()
        }
    };
    init_logging(&log_level);

    let cli = Cli::parse();
    std::process::exit(cli::run(cli));
}

fn init_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", log_level);
            log::LevelFilter::Info
        }
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
