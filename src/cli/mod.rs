//! CLI module for the inventory backend
//!
//! Provides subcommands:
//! - `serve`: bootstrap the database then run the HTTP API (default)
//! - `init-db`: bootstrap the database and exit

pub mod init_db;
pub mod serve;

use clap::{Parser, Subcommand};

/// Inventory backend - users and products over MySQL
#[derive(Parser)]
#[command(name = "inventory-backend")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Bootstrap the database and run the API server (default)
    Serve,

    /// Create the tables and seed the administrator, then exit
    InitDb,
}

impl Cli {
    /// The subcommand to run, `serve` when none was given
    pub fn command(&self) -> &Command {
        self.command.as_ref().unwrap_or(&Command::Serve)
    }
}
