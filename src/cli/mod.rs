// Client Service — CLI Module
//
// Command-line interface using clap derive macros.
// Subcommands: init, add, get, find, list.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{execute, run};

/// Client Service — manage client accounts.
#[derive(Parser, Debug)]
#[command(name = "client-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the client database (overrides CLIENT_SERVICE_DB).
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the client database.
    Init,

    /// Create a new client account.
    Add {
        /// Letters, digits, '.', '_' or '-'; at least 3 characters.
        #[arg(long)]
        username: String,

        /// 8-20 characters with a digit, a lowercase letter, an uppercase
        /// letter and a special character.
        /// For production use, prefer a wrapper that avoids shell history exposure.
        #[arg(long)]
        password: String,
    },

    /// Get a client by ID.
    Get {
        /// The UUID of the client.
        id: String,
    },

    /// Get a client by username.
    Find {
        username: String,
    },

    /// List all clients.
    List,
}
