use rand::Rng;

use crate::app::{QuillError, Result};
use crate::domain::{Pagination, Quote, QueryOptions};
use crate::source::QuoteSource;
use crate::term::prompt::{self, GO_BACK};
use crate::term::render;

/// One drill-down session: an active filter plus the page the user is on.
///
/// The session owns its navigation state exclusively; it is dropped when the
/// user backs out to the main menu.
pub struct NavSession<'a> {
    source: &'a (dyn QuoteSource + Send + Sync),
    filter: QueryOptions,
    limit: u32,
    page: u32,
}

impl<'a> NavSession<'a> {
    pub fn new(
        source: &'a (dyn QuoteSource + Send + Sync),
        filter: QueryOptions,
        limit: u32,
    ) -> Self {
        Self {
            source,
            filter,
            limit,
            page: 1,
        }
    }

    /// Menu loop for the active filter; returns when the user backs out.
    pub async fn browse(&mut self) -> Result<()> {
        loop {
            render::section(&format!("Selected options: {}", self.filter.describe()));
            let items = [
                "Show all quotes",
                "Get random quote",
                "Add a filter...",
                GO_BACK,
            ];
            match prompt::select("What would you like?", &items)? {
                0 => self.paged_view().await?,
                1 => self.random_view().await?,
                2 => self.refine()?,
                _ => return Ok(()),
            }
        }
    }

    /// Page through the filtered result set until the user backs out.
    async fn paged_view(&mut self) -> Result<()> {
        self.page = 1;
        loop {
            let (quotes, pagination) = self.fetch_page().await?;
            render::quotes_page(
                &format!("PAGE {}/{}", self.page, pagination.total_pages),
                &quotes,
            );

            let items = ["Next Page", "Previous Page", GO_BACK];
            match prompt::select("Select action", &items)? {
                0 => self.page = pagination.wrap_next(self.page),
                1 => self.page = pagination.wrap_prev(self.page),
                _ => return Ok(()),
            }
        }
    }

    /// Show random quotes drawn from the filtered result set, one per page
    /// fetch. Each draw picks a new random page for the next one.
    async fn random_view(&mut self) -> Result<()> {
        self.page = 1;
        loop {
            let (quotes, pagination) = self.fetch_page().await?;
            let quote = pick_random(&quotes)?;
            render::quote_card(quote);
            self.page = random_page(pagination.total_pages);

            let items = ["Get Another", GO_BACK];
            match prompt::select("Random quote", &items)? {
                0 => continue,
                _ => return Ok(()),
            }
        }
    }

    /// AND an extra search term into the active filter and start over on
    /// page 1. The term replaces any previous one; author and genre stay.
    fn refine(&mut self) -> Result<()> {
        let term = prompt::search_term("Filter")?;
        self.filter = self.filter.with_query(term);
        self.page = 1;
        Ok(())
    }

    async fn fetch_page(&self) -> Result<(Vec<Quote>, Pagination)> {
        let options = self.filter.paged(self.page, self.limit);
        render::with_spinner("Fetching quotes...", self.source.quotes(&options)).await
    }
}

/// Pick one quote uniformly at random from the page in hand.
fn pick_random(quotes: &[Quote]) -> Result<&Quote> {
    if quotes.is_empty() {
        return Err(QuillError::EmptyResult);
    }
    let index = rand::thread_rng().gen_range(0..quotes.len());
    Ok(&quotes[index])
}

/// Uniformly random page number in `[1, total_pages]`.
fn random_page(total_pages: u32) -> u32 {
    if total_pages <= 1 {
        1
    } else {
        rand::thread_rng().gen_range(1..=total_pages)
    }
}
