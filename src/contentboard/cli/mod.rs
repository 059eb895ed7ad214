//! # CLI Layer
//!
//! This module is **one possible UI client** for the content board, not the application
//! itself. It is the only place that knows about terminal I/O, prompts and exit codes.
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions (`Cli`, `Commands`, flag groups)
//! - `commands.rs`: context setup, logging, dispatch to `BoardApi`, prompts
//! - `render.rs`: record lists, record details and messages as terminal text
//!
//! Running `contentboard` with no subcommand lists the board.
//!
//! The delete confirmation dialog becomes a `y/N` question on stdin; `--yes` answers it
//! up front.

mod commands;
mod render;
mod setup;

pub use commands::run;
