//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use pokedex::{
    cli::{Commands, Pokedex},
    commands::{
        info::handle_info,
        list::{handle_list, handle_type_list},
        quiz::{handle_loading, handle_quiz},
        types::handle_types,
        CommandContext,
    },
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let app = Pokedex::parse();
    let ctx = CommandContext::new(app.global)?;

    match app.command {
        Commands::Info { pokemon } => handle_info(&ctx, &pokemon).await?,
        Commands::List { page } => handle_list(&ctx, page.request()).await?,
        Commands::Type { kind, page } => handle_type_list(&ctx, kind, page.request()).await?,
        Commands::Quiz { id } => handle_quiz(&ctx, id, &mut std::io::stdin().lock()).await?,
        Commands::Loading => handle_loading(&ctx).await?,
        Commands::Types { active } => handle_types(&ctx, &active)?,
    }

    Ok(())
}
