//! Command-line interface for awesome-rank
//!
//! This module implements the CLI commands and ties the other modules together into
//! end-to-end runs. It handles argument parsing, configuration management, logging,
//! progress display, and report output.
//!
//! ## Commands
//!
//! - **rank**: Read the README of an index repository, collect facts about every
//!   repository it links to, rank them, and generate reports
//! - **init**: Generate a default configuration file
//!
//! The `run` function parses command-line arguments using clap and routes to the
//! appropriate command handler.

mod common;
mod config;
mod host;
mod init;
mod progress_reporter;
mod rank;
mod run;

pub use common::{ColorMode, LogLevel};
pub use config::Config;
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use progress_reporter::ProgressReporter;
pub use rank::{RankArgs, process_rank};
pub use run::run;
