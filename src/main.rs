//! Shapes CLI - sort shapes by area and summarize them

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = shape_stats::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
