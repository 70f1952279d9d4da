//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "plexcleaner")]
#[command(about = "Reconcile a Plex movie library with the files on disk", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that reads the library.
#[derive(Args, Clone)]
pub(crate) struct GlobalArgs {
    /// Installation location of the Plex Media Server
    #[arg(long, global = true, default_value = "/var/lib/plexmediaserver")]
    pub plex_home: PathBuf,

    /// Override the expected Plex database location
    #[arg(long, global = true)]
    pub database_override: Option<PathBuf>,

    /// Settings file (defaults to ~/.config/plexcleaner/settings.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Remove this string from the path of every media file
    #[arg(long, global = true)]
    pub remove_from_path: Option<String>,

    /// Add this string to the beginning of every media file path
    #[arg(long, global = true)]
    pub append_to_path: Option<String>,

    /// Maximum number of movies to read from the database
    #[arg(short, long, global = true)]
    pub limit: Option<usize>,

    /// Application verbosity
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show how each movie would be renamed and moved
    Plan {
        /// Consolidate the updated library in this folder
        #[arg(long)]
        export: Option<PathBuf>,

        /// Do not plan Plex database updates for moved media
        #[arg(long)]
        no_update: bool,

        /// Name that each movie jacket will have
        #[arg(long, default_value = "poster.jpg")]
        jacket: String,

        /// Stop if a movie file is not found on the filesystem
        #[arg(long)]
        interrupt: bool,
    },

    /// Print every movie as one JSON object per line
    Export {
        /// Compute target paths under this folder instead of in place
        #[arg(long)]
        target: Option<PathBuf>,
    },

    /// Show library statistics
    Stats,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub(crate) enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub(crate) fn filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
