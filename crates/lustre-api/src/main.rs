//! Lustre CLI entry point.
//!
//! Binary name: `lustre`
//!
//! Parses CLI arguments, loads configuration and the persisted selection,
//! then dispatches to the appropriate command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, SelectionAction};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,lustre=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "lustre", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init(cli.data_dir.clone(), cli.catalog.clone()).await;

    match cli.command {
        Commands::Products { category, search } => {
            cli::products::list_products(&state, category.as_deref(), search.as_deref(), cli.json)
                .await?;
        }

        Commands::Select { id } => {
            cli::selection::select_product(&state, id, cli.json).await?;
        }

        Commands::Deselect { id } => {
            cli::selection::deselect_product(&state, id, cli.json).await?;
        }

        Commands::Selection { action } => match action {
            Some(SelectionAction::Clear) => {
                cli::selection::clear_selection(&state, cli.json).await?;
            }
            None => {
                cli::selection::show_selection(&state, cli.json).await?;
            }
        },

        Commands::Routine { transcript } => {
            cli::routine::run_routine(&state, transcript.as_deref(), cli.json).await?;
        }

        Commands::Completions { .. } => unreachable!("handled before state init"),
    }

    Ok(())
}
