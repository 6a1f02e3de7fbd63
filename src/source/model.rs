//! Wire model for the QuoteGarden JSON envelope.
//!
//! Responses arrive as `{statusCode, message, pagination, totalQuotes,
//! data}`; only the fields the client consumes are decoded, the rest are
//! ignored by serde.

use serde::Deserialize;

use crate::domain::{Pagination, Quote};

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub pagination: Pagination,
    #[serde(default)]
    pub data: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "quoteText")]
    pub quote_text: String,
    #[serde(rename = "quoteAuthor", default)]
    pub quote_author: String,
    #[serde(rename = "quoteGenre", default)]
    pub quote_genre: String,
}

impl From<QuoteRecord> for Quote {
    fn from(record: QuoteRecord) -> Self {
        Quote {
            id: record.id,
            text: record.quote_text,
            author: record.quote_author,
            genre: record.quote_genre,
        }
    }
}
