//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sideway")]
#[command(about = "Side-panel notepad for short text notes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new notepad
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Storage backend (file, memory)
        #[arg(short, long, default_value = "file")]
        backend: String,
    },

    /// List notes, newest first
    List {
        /// Show at most this many notes
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show a single note
    Show {
        /// Note id
        id: String,
    },

    /// Create a note
    New {
        /// Note title (blank uses the default title)
        #[arg(short, long, default_value = "")]
        title: String,

        /// Note content
        #[arg(short, long, default_value = "")]
        content: String,
    },

    /// Edit a note; omitted fields keep their current value
    Edit {
        /// Note id
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,
    },

    /// Delete a note
    Delete {
        /// Note id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
