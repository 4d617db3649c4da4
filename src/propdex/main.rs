//! The `propdex` binary.
//!
//! All behavior lives in the library and in the `cli` module; this file only
//! maps a failed run to an exit code.

mod cli;

use colored::Colorize;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
