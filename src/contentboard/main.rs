//! # contentboard CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file only invokes
//! `cli::run()` and handles process termination. Everything the CLI calls into is the
//! `contentboard` library, which knows nothing about terminals.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
