use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "shiplog")]
#[command(about = "A small personal journal for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new entry
    Add {
        /// Entry text
        text: String,
    },

    /// List entries, newest first
    #[command(alias = "ls")]
    List,

    /// Delete the entry at a 1-based position (1 = newest)
    #[command(alias = "rm")]
    Delete {
        /// Position of the entry to delete
        index: usize,
    },

    /// Search entries by case-insensitive substring
    Search {
        /// Substring to look for
        query: String,
    },

    /// Show entry count and mean text length
    Stats,

    /// Delete all entries
    Clear {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },
}
