//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// In-memory demo bank: branches, depositors, interest projection and substring search
#[derive(Parser, Debug)]
#[command(name = "demobank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file, applied on top of the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Re-prompt on answers other than y/n
    #[arg(long, global = true, conflicts_with = "lenient")]
    pub strict: bool,

    /// Treat every answer other than y as n
    #[arg(long, global = true)]
    pub lenient: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Answer mode requested on the command line, if any.
    pub fn strict_override(&self) -> Option<bool> {
        match (self.strict, self.lenient) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive search (default)
    Shell,

    /// Show bank summary
    Info,

    /// Find branches by name substring
    Branch {
        /// Search term (case-insensitive)
        term: String,
    },

    /// Find depositors by name substring
    Depositor {
        /// Search term (case-insensitive)
        term: String,
        /// Projection horizon in months
        #[arg(short, long)]
        months: Option<u32>,
    },

    /// Search by category: банк, филиал or вклад
    Search {
        /// Category keyword
        category: String,
        /// Search term, ignored for банк
        term: Option<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print effective settings as TOML
    Show,
    /// Print global config file location
    Path,
}
