//! quizdb entry point
//!
//! Parses arguments and dispatches to the CLI module, exiting non-zero on
//! failure. All other logic lives in `cli`.

use quizdb::cli;

fn main() {
    // Failures are already reported as a FATAL log line by the CLI
    if cli::run().is_err() {
        std::process::exit(1);
    }
}
