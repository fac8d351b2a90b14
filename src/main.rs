use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use gewerke_cleaner::constants::constants as consts;
use gewerke_cleaner::{ConfigManager, GewerkeCleaner};

/// Cleans a list of trade categories: trims, lowercases, drops placeholders
/// and numeric noise, removes duplicates and writes the sorted result.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Raw entries, one per line
    input_file: PathBuf,

    /// Destination for the cleaned entries (overwritten)
    output_file: PathBuf,

    /// TOML file with stricter rules (higher min_length, extra placeholders)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(input: &Path, output: &Path, config_path: Option<&Path>) -> Result<()> {
    let config_manager = ConfigManager::new(config_path)?;
    let cleaner = GewerkeCleaner::new(config_manager.validity_filter());
    cleaner.clean(input, output)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(&cli.input_file, &cli.output_file, cli.config.as_deref()) {
        Ok(()) => {
            println!("{} {}", consts::SUCCESS_MESSAGE, cli.output_file.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{} {:#}", consts::ERROR_MESSAGE, e);
            ExitCode::FAILURE
        }
    }
}
