//! Quern CLI binary.

use clap::Parser;
use quern::cli::args::QuernArgs;
use quern::cli::commands::execute_command;
use std::process;

fn main() {
    // Parse command line arguments using clap
    let args = QuernArgs::parse();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
