use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::app::{QuillError, Result};
use crate::domain::{Pagination, Quote, QueryOptions};
use crate::source::model::{Envelope, QuoteRecord};
use crate::source::{QuoteSource, LIST_PAGE_LIMIT};

pub const QUOTE_GARDEN_URL: &str = "https://quote-garden.herokuapp.com/api/v3";

pub struct QuoteGarden {
    base_url: String,
    client: Client,
}

impl QuoteGarden {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("quill/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path_and_query);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json; charset=utf-8")
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() < 200 || status.as_u16() >= 400 {
            return Err(QuillError::Status(status));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| QuillError::Decode(e.to_string()))
    }
}

impl Default for QuoteGarden {
    fn default() -> Self {
        Self::new(QUOTE_GARDEN_URL)
    }
}

#[async_trait]
impl QuoteSource for QuoteGarden {
    async fn random_quote(&self) -> Result<Quote> {
        let envelope: Envelope<QuoteRecord> = self.get_json("/quotes/random").await?;
        let record = envelope
            .data
            .into_iter()
            .next()
            .ok_or_else(|| QuillError::Decode("random quote response carried no entry".into()))?;
        Ok(record.into())
    }

    async fn all_genres(&self) -> Result<Vec<String>> {
        let query = QueryOptions::default().paged(1, LIST_PAGE_LIMIT);
        let envelope: Envelope<String> =
            self.get_json(&format!("/genres?{}", query.query_string())).await?;
        Ok(envelope.data)
    }

    async fn all_authors(&self) -> Result<Vec<String>> {
        let query = QueryOptions::default().paged(1, LIST_PAGE_LIMIT);
        let envelope: Envelope<String> =
            self.get_json(&format!("/authors?{}", query.query_string())).await?;
        Ok(envelope.data)
    }

    async fn quotes(&self, options: &QueryOptions) -> Result<(Vec<Quote>, Pagination)> {
        let envelope: Envelope<QuoteRecord> =
            self.get_json(&format!("/quotes?{}", options.query_string())).await?;
        let quotes = envelope.data.into_iter().map(Quote::from).collect();
        Ok((quotes, envelope.pagination))
    }
}
