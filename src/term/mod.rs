pub mod prompt;
pub mod render;
pub mod session;

use crate::app::{AppContext, QuillError, Result};
use crate::domain::QueryOptions;
use crate::term::prompt::GO_BACK;
use crate::term::session::NavSession;

/// Run the interactive menu until the user exits or an error ends the
/// session. A prompt interrupt (Ctrl-C) takes the graceful-exit path; any
/// other error is reported and propagated so the process exits non-zero.
pub async fn run(ctx: &AppContext) -> Result<()> {
    render::intro();

    let mut limit = ctx.page_limit();
    match menu_loop(ctx, &mut limit).await {
        Ok(()) => {
            render::exit_banner();
            Ok(())
        }
        Err(e) if e.is_interrupt() => {
            render::exit_banner();
            Ok(())
        }
        Err(e) => {
            render::error_banner(&e);
            Err(e)
        }
    }
}

async fn menu_loop(ctx: &AppContext, limit: &mut u32) -> Result<()> {
    loop {
        render::section("Main menu");
        let items = [
            "Configure",
            "Get Random Quote",
            "Get Based On Genres",
            "Get Based On Authors",
            "Search...",
            "Exit",
        ];
        match prompt::select("What would you like?", &items)? {
            0 => configure(limit)?,
            1 => random_quote(ctx).await?,
            2 => browse_genres(ctx, *limit).await?,
            3 => browse_authors(ctx, *limit).await?,
            4 => search(ctx, *limit).await?,
            _ => return Ok(()),
        }
    }
}

/// Adjust the source and page limit for the current run. Nothing is written
/// back to the config file.
fn configure(limit: &mut u32) -> Result<()> {
    let items = ["Select source", "Select quotes limit", GO_BACK];
    match prompt::select("What would you like?", &items)? {
        0 => {
            let sources = ["QuoteGarden", GO_BACK];
            if prompt::select("Source for quotes", &sources)? == 0 {
                render::info("Using QuoteGarden");
            }
        }
        1 => *limit = prompt::positive_number("Limit (default=9)")?,
        _ => {}
    }
    Ok(())
}

async fn random_quote(ctx: &AppContext) -> Result<()> {
    render::section("Retrieving Random Quote...");
    let quote = render::with_spinner("Sending request...", ctx.source.random_quote()).await?;
    render::quote_card(&quote);
    Ok(())
}

async fn browse_genres(ctx: &AppContext, limit: u32) -> Result<()> {
    render::section("Retrieving Quotes From Genres...");
    let genres = render::with_spinner("Sending request...", ctx.source.all_genres()).await?;
    render::info(&format!("Number of items: {}", genres.len()));

    let genres = narrow_items(genres)?;
    let selection = prompt::select_from("Select genre", &genres)?;
    NavSession::new(ctx.source.as_ref(), QueryOptions::for_genre(selection), limit)
        .browse()
        .await
}

async fn browse_authors(ctx: &AppContext, limit: u32) -> Result<()> {
    render::section("Retrieving Quotes From Authors...");
    let authors = render::with_spinner("Sending request...", ctx.source.all_authors()).await?;
    render::info(&format!("Number of items: {}", authors.len()));

    let authors = narrow_items(authors)?;
    let selection = prompt::select_from("Select author", &authors)?;
    NavSession::new(ctx.source.as_ref(), QueryOptions::for_author(selection), limit)
        .browse()
        .await
}

async fn search(ctx: &AppContext, limit: u32) -> Result<()> {
    render::section("Searching Quotes...");
    let term = prompt::search_term("Search")?;
    NavSession::new(ctx.source.as_ref(), QueryOptions::for_search(term), limit)
        .browse()
        .await
}

/// Optionally narrow a fetched genre/author list before presenting it.
fn narrow_items(items: Vec<String>) -> Result<Vec<String>> {
    let choices = ["No filter", "Filter search", GO_BACK];
    match prompt::select("Narrow the list?", &choices)? {
        1 => {
            let needle = prompt::search_term("Filter")?;
            let filtered = filter_items(items, &needle);
            if filtered.is_empty() {
                return Err(QuillError::EmptyResult);
            }
            Ok(filtered)
        }
        _ => Ok(items),
    }
}

/// Case-insensitive substring filter over a fetched list.
fn filter_items(items: Vec<String>, needle: &str) -> Vec<String> {
    let needle = needle.to_lowercase();
    items
        .into_iter()
        .filter(|item| item.to_lowercase().contains(&needle))
        .collect()
}
