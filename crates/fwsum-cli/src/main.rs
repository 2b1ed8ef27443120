#![deny(warnings)]
#![deny(clippy::all)]

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use fwsum_core::{checksum_file, FwsumError};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_CLI: i32 = 2;
const EXIT_IO: i32 = 4;
const DEFAULT_FIRMWARE_PATH: &str = "data/firmware.bin";

#[derive(Parser, Debug)]
#[command(
    name = "fwsum",
    version,
    about = "Print the checksum of a firmware image as a decimal integer"
)]
struct Cli {
    /// Firmware image to checksum
    #[arg(default_value = DEFAULT_FIRMWARE_PATH)]
    path: PathBuf,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Checksum(#[from] FwsumError),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                EXIT_CLI
            } else {
                EXIT_SUCCESS
            };
        }
    };

    match cmd_checksum(&cli.path) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            report_error(&err);
            map_exit_code(&err)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn report_error(err: &CliError) {
    error!(error = %err, "checksum failed");
    eprintln!("error: {err}");
}

fn map_exit_code(err: &CliError) -> i32 {
    match err {
        CliError::Checksum(_) => EXIT_IO,
        CliError::Output(_) => EXIT_IO,
    }
}

fn cmd_checksum(path: &Path) -> Result<(), CliError> {
    info!(path = %path.display(), "reading firmware");

    let sum = checksum_file(path)?;
    info!(len = sum.len, value = sum.value, "firmware checksummed");

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", sum.value)?;
    stdout.flush()?;

    Ok(())
}
