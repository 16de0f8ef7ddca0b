use crate::core::time::TimeField;
use crate::domain::model::SortKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "utilslib")]
#[command(about = "Sort record files, compute clock times and create files")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Sort records, one per line
    Sort(SortArgs),

    /// Time formatting and differences
    Time {
        #[command(subcommand)]
        command: TimeCommand,
    },

    /// Create folders and files
    Files {
        #[command(subcommand)]
        command: FilesCommand,
    },
}

#[derive(Debug, Clone, Args)]
pub struct SortArgs {
    /// Sort mode; falls back to the configured default
    #[arg(long, value_enum)]
    pub mode: Option<SortKind>,

    /// Read records from this file instead of stdin
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Write sorted records to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Append to the output file instead of overwriting it
    #[arg(long, requires = "output")]
    pub append: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum TimeCommand {
    /// Render a millisecond count as H:MM:SS:mm
    Format {
        #[arg(allow_hyphen_values = true)]
        millis: i64,

        /// Comma separated subset of h,m,s,ms
        #[arg(long, value_delimiter = ',')]
        fields: Vec<TimeField>,

        #[arg(long)]
        json: bool,
    },

    /// Subtract two millisecond counts
    Diff {
        #[arg(allow_hyphen_values = true)]
        minuend: i64,

        #[arg(allow_hyphen_values = true)]
        subtrahend: i64,

        /// Wrap negative results around a 24 hour clock
        #[arg(long)]
        clock: bool,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum FilesCommand {
    CreateFolder {
        parent: PathBuf,
        name: String,
    },
    CreateFile {
        name: String,
        /// Target folder; falls back to the configured default folder
        #[arg(long)]
        folder: Option<PathBuf>,
    },
}
