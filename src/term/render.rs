use std::future::Future;
use std::time::Duration;

use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};
use indicatif::ProgressBar;
use yansi::{Color, Paint};

use crate::app::QuillError;
use crate::domain::Quote;

const CARD_WIDTH: u16 = 64;
const GRID_WIDTH: u16 = 120;
const GRID_COLUMNS: usize = 3;

pub fn intro() {
    println!();
    println!(
        "{}",
        Paint::black("  Quill — quotes on tap  ").bg(Color::Green).bold()
    );
}

pub fn exit_banner() {
    println!();
    println!(
        "{}",
        Paint::white("  Come back for another quote soon.  ")
            .bg(Color::Blue)
            .bold()
    );
}

pub fn error_banner(err: &QuillError) {
    println!();
    println!(
        "{}",
        Paint::white(format!("  ERROR: {}  ", err)).bg(Color::Red).bold()
    );
}

pub fn section(title: &str) {
    println!();
    println!("{}", Paint::cyan(format!("# {}", title)).bold());
}

pub fn info(message: &str) {
    println!("{} {}", Paint::blue("i").bold(), message);
}

/// Render one quote as a boxed card: genre header, wrapped text, author.
pub fn quote_card(quote: &Quote) {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(CARD_WIDTH)
        .set_header(vec![
            Cell::new(quote.genre.to_uppercase()).add_attribute(Attribute::Bold)
        ])
        .add_row(vec![Cell::new(&quote.text)])
        .add_row(vec![
            Cell::new(format!("-- {}", quote.display_author())).add_attribute(Attribute::Italic)
        ]);
    println!("{table}");
}

/// Render one page of quotes as a grid of cards under a section title.
pub fn quotes_page(title: &str, quotes: &[Quote]) {
    section(title);
    if quotes.is_empty() {
        info("No quotes on this page");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(GRID_WIDTH);
    for chunk in quotes.chunks(GRID_COLUMNS) {
        let cells: Vec<Cell> = chunk
            .iter()
            .map(|quote| {
                Cell::new(format!(
                    "{}\n{}\n-- {}",
                    quote.genre.to_uppercase(),
                    quote.text,
                    quote.display_author()
                ))
            })
            .collect();
        table.add_row(cells);
    }
    println!("{table}");
}

/// Show a spinner while a fetch is in flight.
pub async fn with_spinner<F, T>(message: &'static str, fut: F) -> T
where
    F: Future<Output = T>,
{
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    let result = fut.await;
    spinner.finish_and_clear();
    result
}
