mod app;
mod cli;
mod config;
mod consts;
mod error;
mod logger;
mod portal;
mod snapshot;
mod utils;

use clap::Parser;

use app::run_collection;
use cli::Cli;
use config::Config;
use error::AppError;
use portal::{Credentials, load_env_file};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    logger::init(cli.log_level())?;

    let cli = cli.with_config(&Config::load());
    let settings = cli.settings()?;

    load_env_file(cli.env_file.as_deref())?;
    let credentials = Credentials::from_env()?;

    let path = run_collection(&settings, &credentials)?;

    if !cli.quiet {
        let filename = path.file_name().unwrap_or(path.as_os_str());
        println!("Saved data to {}", filename.to_string_lossy());
    }
    Ok(())
}
