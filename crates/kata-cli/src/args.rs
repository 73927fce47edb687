use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Main command-line interface for the Kata lesson runner
///
/// Kata runs gamified coding lessons in the terminal: each lesson walks
/// through a sequence of activities against a simulated project, with a
/// simulated AI assistant providing generated code and feedback.
#[derive(Parser)]
#[command(version, about, name = "kata")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Load lessons from a JSON catalog file instead of the built-in one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Kata CLI
#[derive(Subcommand)]
pub enum Commands {
    /// List the lessons in the catalog
    #[command(alias = "l")]
    Lessons,

    /// Run a lesson interactively
    #[command(alias = "r")]
    Run {
        /// Lesson to run. Defaults to the catalog's first lesson
        #[arg(long)]
        lesson: Option<String>,

        /// Print feedback immediately instead of streaming it
        #[arg(long)]
        fast: bool,

        /// Number of lives to start with
        #[arg(long)]
        lives: Option<u32>,
    },
}
