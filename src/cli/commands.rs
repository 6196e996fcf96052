use crate::config::{DEFAULT_ADDR, DEFAULT_DATA_FILE, DEFAULT_SEARCH_LIMIT};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vecstore", about = "In-memory vector store with cosine similarity search")]
pub struct Cli {
    /// Snapshot file loaded at startup and written by SAVE
    #[arg(long, global = true, env = "VECSTORE_DATA", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the line protocol (ADD, SEARCH, SAVE) over TCP
    Serve {
        /// Address to listen on
        #[arg(long, env = "VECSTORE_ADDR", default_value = DEFAULT_ADDR)]
        addr: String,
        /// Number of hits returned by SEARCH
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        search_limit: usize,
    },
    /// Add (or replace) a vector in the data file
    Add {
        id: String,
        /// Vector components
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// Search the data file for the most similar vectors
    Search {
        /// Query vector components
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },
    /// Show entry count and dimension histogram of the data file
    Stats,
}
