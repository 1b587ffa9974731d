use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version, about = "Item catalog service with image storage")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Start {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Add an item from a local image file
    AddItem {
        /// Item name
        #[arg(long)]
        name: String,

        /// Category name; created if it does not exist
        #[arg(long)]
        category: String,

        /// Image file to upload
        #[arg(required = true)]
        image: PathBuf,
    },

    /// List all items as JSON
    List,

    /// Search items by exact name
    Search {
        /// Name to match
        keyword: String,
    },

    /// Show a single item by id
    Show {
        /// Item id
        id: i64,
    },

    /// Validate configuration file
    Validate,

    /// Display version information
    Version,
}
