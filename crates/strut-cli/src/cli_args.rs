use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "strut",
    version,
    about = "Convention enforcement for layered architectures and DI bindings"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Report run statistics on stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Write a default configuration file
    Init {
        /// Configuration directory (default: .strut)
        #[arg(long)]
        config_dir: Option<PathBuf>,
    },

    /// Check a program snapshot against the configured conventions
    Check {
        /// Path to the program snapshot (JSON)
        snapshot: PathBuf,
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
        /// Configuration directory (default: .strut)
        #[arg(long)]
        config_dir: Option<PathBuf>,
    },
}
