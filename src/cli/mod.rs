pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quill")]
#[command(about = "An interactive terminal quote browser", long_about = None)]
pub struct Cli {
    /// Quotes shown per page when browsing results
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// One-shot commands. Without a subcommand the interactive menu starts.
#[derive(Subcommand)]
pub enum Commands {
    /// Print a single random quote
    Random,
    /// List the genres known to the source
    Genres,
    /// List the authors known to the source
    Authors,
    /// Print one page of quotes matching a search term
    Search {
        /// Term to search for
        term: String,

        /// Page number to fetch
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
}
