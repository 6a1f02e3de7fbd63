use crate::app::{AppContext, Result};
use crate::domain::QueryOptions;
use crate::term::render;

pub async fn random(ctx: &AppContext) -> Result<()> {
    let quote = ctx.source.random_quote().await?;
    render::quote_card(&quote);
    Ok(())
}

pub async fn genres(ctx: &AppContext) -> Result<()> {
    let genres = ctx.source.all_genres().await?;

    if genres.is_empty() {
        println!("No genres");
        return Ok(());
    }

    for genre in genres {
        println!("{}", genre);
    }

    Ok(())
}

pub async fn authors(ctx: &AppContext) -> Result<()> {
    let authors = ctx.source.all_authors().await?;

    if authors.is_empty() {
        println!("No authors");
        return Ok(());
    }

    for author in authors {
        println!("{}", author);
    }

    Ok(())
}

pub async fn search(ctx: &AppContext, term: &str, page: u32) -> Result<()> {
    let options = QueryOptions::for_search(term).paged(page.max(1), ctx.page_limit());
    let (quotes, pagination) = ctx.source.quotes(&options).await?;

    if quotes.is_empty() {
        println!("No quotes matched \"{}\"", term);
        return Ok(());
    }

    render::quotes_page(
        &format!("PAGE {}/{}", options.page, pagination.total_pages),
        &quotes,
    );
    Ok(())
}
