//! flag-cat - print a fixed file line by line behind an ANSI reset code

mod color;
mod error;
mod printer;

use clap::Parser;
use error::{Error, Result};
use log::{debug, warn};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

/// File read on every run
const FLAG_PATH: &str = "/flag";

#[derive(Parser)]
#[command(name = "flag-cat")]
#[command(version, about = "Print /flag line by line behind an ANSI reset code")]
struct Cli {}

fn main() -> ExitCode {
    Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let result = printer::print_file(Path::new(FLAG_PATH), &mut io::stdout().lock());
    ExitCode::from(exit_status(&result, &mut io::stderr()))
}

/// Map a run result to a process status, reporting open failures to `err`.
///
/// Only an open failure is fatal. Output write failures end the run quietly.
fn exit_status<E: Write>(result: &Result<usize>, err: &mut E) -> u8 {
    match result {
        Ok(_) => 0,
        Err(e @ Error::Open { path, .. }) => {
            debug!("open failed for {}", path.display());
            // Nothing sensible left to do if stderr is gone too
            let _ = writeln!(err, "{e}");
            1
        }
        Err(e @ Error::Write(_)) => {
            warn!("{e}");
            0
        }
    }
}
