use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "postits")]
#[command(about = "A tiny post-it board for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the note store file (defaults to the user data dir)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "a")]
    Add {
        /// Title of the note
        title: String,

        /// Content of the note
        content: String,
    },

    /// List notes, most recently updated first
    #[command(alias = "ls")]
    List,

    /// Edit a note in place (prompts for replacement title and content)
    #[command(alias = "e")]
    Edit {
        /// Position of the note in the list (1-based)
        index: usize,
    },

    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Position of the note in the list (1-based)
        index: usize,
    },

    /// Delete every note on the board
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}
