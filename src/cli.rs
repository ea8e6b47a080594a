use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lector")]
#[command(about = "lector - Search text files and complete words by frequency.")]
#[command(version = env!("VERSION"))]
pub struct Cli {
    /// Path to one or more config files (merged in order). Built-in defaults
    /// are used if none are given.
    #[arg(long, global = true, action = clap::ArgAction::Append)]
    pub config: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a sample config file.
    NewConfig {
        /// Output path for config file.
        #[arg(short, long, default_value = "config.toml")]
        path: PathBuf,
    },

    /// Find every occurrence of a pattern in a text file.
    Search {
        /// Text file to search.
        file: PathBuf,

        /// Pattern to look for.
        pattern: String,

        /// Ignore ASCII case (overrides the config).
        #[arg(short, long, conflicts_with = "exact")]
        ignore_case: bool,

        /// Match case exactly (overrides the config).
        #[arg(short, long)]
        exact: bool,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Suggest words from a text file that start with a prefix.
    Complete {
        /// Text file to index.
        file: PathBuf,

        /// Prefix to complete. Empty lists every word.
        #[arg(default_value = "")]
        prefix: String,

        /// Maximum number of suggestions (defaults to the config).
        #[arg(short, long)]
        limit: Option<usize>,

        /// List suggestions alphabetically instead of by frequency.
        #[arg(long)]
        unranked: bool,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show word statistics for a text file.
    Stats {
        /// Text file to analyse.
        file: PathBuf,

        /// Number of most frequent words to list.
        #[arg(long, default_value = "10")]
        top: usize,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Interactive prompt: every line is searched and completed as you go.
    Shell {
        /// Text file to load at startup. Use `:load <file>` to switch.
        file: Option<PathBuf>,
    },
}
