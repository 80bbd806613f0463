use crate::types::{LogLevel, OutputFormat, RenderFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "schemaview")]
#[command(about = "Render schema.org items with type-specific renderers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to $SCHEMAVIEW_CONFIG, then the user config directory)
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config_path: Option<String>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Render items from a JSON array or JSONL file ('-' for stdin)")]
    Render {
        input: String,

        #[arg(long, default_value = "text")]
        format: RenderFormat,
    },

    #[command(about = "List built-in renderers and the types they handle")]
    Types {
        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    #[command(about = "Show or initialize the render configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    #[command(about = "Prepare statute datasets")]
    Statutes {
        #[command(subcommand)]
        command: StatutesCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write the default configuration")]
    Init {
        #[arg(long, help = "Overwrite an existing config file")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum StatutesCommand {
    #[command(about = "Convert <input_dir>/<state>/<year>.jsonl dumps into Statute JSONL")]
    Import {
        input_dir: PathBuf,

        year: String,

        #[arg(long, short)]
        output: PathBuf,

        #[arg(long, help = "Write one file per state plus a manifest")]
        by_state: bool,

        #[arg(long, help = "Only process the first N states (sorted by name; 0 means all)")]
        limit_states: Option<usize>,
    },
}
