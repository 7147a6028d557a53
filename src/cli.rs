//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// Shortener - A minimal in-memory URL shortener
#[derive(Parser, Debug)]
#[command(name = "shortener")]
#[command(version)]
#[command(about = "A minimal in-memory URL shortener", long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./config.toml if present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Write a sample configuration file
    GenerateConfig {
        /// Output file path (default: stdout)
        output: Option<String>,
    },
}
