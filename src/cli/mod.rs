use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::publish::TOOL_ENV;

#[derive(Parser)]
#[command(name = "multipub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML config file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Publish tool executable (default: dotnet)
    #[arg(long, global = true, env = TOOL_ENV)]
    pub tool: Option<String>,

    /// Project file to publish
    #[arg(long, global = true, value_name = "PATH")]
    pub project: Option<PathBuf>,

    /// Directory that receives one output directory per target
    #[arg(long, global = true, value_name = "DIR")]
    pub build_root: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Publish every target in order (the default)
    Publish {
        /// Exit with status 1 when any invocation fails
        #[arg(long)]
        strict: bool,

        /// Print the run report as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Print the publish commands without running them
    Plan {
        /// Print the commands as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}
