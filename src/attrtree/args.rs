use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "attrtree")]
#[command(about = "Inspect and edit attribute trees from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// State document to read (and write back after changes)
    #[arg(short, long, global = true, default_value = "attrtree.state.json")]
    pub file: PathBuf,

    /// Directory holding attrtree.json (defaults to the state document's directory)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the tree
    #[command(alias = "ls")]
    Show {
        /// Include children of collapsed folders
        #[arg(short, long)]
        all: bool,
    },

    /// Expand or collapse a folder
    Expand {
        /// Folder id
        folder: String,
    },

    /// Check or uncheck an attribute
    Select {
        /// Attribute id
        leaf: String,

        /// Selection mode (defaults to the configured mode)
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,
    },

    /// Drag an attribute to a new position
    #[command(alias = "mv")]
    Move {
        /// Attribute id
        leaf: String,

        /// Destination folder id
        folder: String,

        /// Insertion slot among the folder's current children
        index: usize,

        /// Show where the attribute would land without moving it
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove an unlocked attribute
    #[command(alias = "rm")]
    Remove {
        /// Attribute id
        leaf: String,
    },

    /// Find attributes by label
    Search {
        /// Search term
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// List checked attributes in display order
    Selected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Single,
    Multi,
}
