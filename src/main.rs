use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use quill::app::AppContext;
use quill::cli::{commands, Cli, Commands};
use quill::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(limit) = cli.limit {
        config.source.page_limit = limit;
    }
    let ctx = AppContext::new(config);

    match cli.command {
        Some(Commands::Random) => {
            commands::random(&ctx).await?;
        }
        Some(Commands::Genres) => {
            commands::genres(&ctx).await?;
        }
        Some(Commands::Authors) => {
            commands::authors(&ctx).await?;
        }
        Some(Commands::Search { term, page }) => {
            commands::search(&ctx, &term, page).await?;
        }
        None => {
            quill::term::run(&ctx).await?;
        }
    }

    Ok(())
}
