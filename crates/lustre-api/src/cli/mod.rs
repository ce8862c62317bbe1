//! CLI command definitions and dispatch for the `lustre` binary.
//!
//! Uses clap derive macros for argument parsing. Commands follow the
//! catalog workflow: browse products, curate a selection, then generate a
//! routine and chat about it.

pub mod products;
pub mod routine;
pub mod selection;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Browse a cosmetics catalog and generate beauty routines with an AI assistant.
#[derive(Parser)]
#[command(name = "lustre", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Data directory (defaults to ~/.lustre).
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Catalog JSON file (defaults to {data_dir}/products.json).
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List catalog products, optionally filtered.
    #[command(alias = "ls")]
    Products {
        /// Only show products in this category (exact match).
        #[arg(long)]
        category: Option<String>,

        /// Only show products whose name, brand, or description contains
        /// this term (case-insensitive).
        #[arg(long)]
        search: Option<String>,
    },

    /// Add a product to the selection.
    Select {
        /// Product id to select.
        id: u32,
    },

    /// Remove a product from the selection.
    Deselect {
        /// Product id to deselect.
        id: u32,
    },

    /// Show the current selection.
    Selection {
        #[command(subcommand)]
        action: Option<SelectionAction>,
    },

    /// Generate a routine from the selection, then chat about it.
    Routine {
        /// Write the conversation as an HTML transcript file on exit.
        #[arg(long)]
        transcript: Option<PathBuf>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum SelectionAction {
    /// Remove every product from the selection.
    Clear,
}
