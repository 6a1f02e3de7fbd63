//! # Quill
//!
//! An interactive terminal client for browsing quotes from a remote
//! quote-aggregation API (QuoteGarden v3).
//!
//! ## Architecture
//!
//! ```text
//! Source → Domain → Navigation → Terminal
//! ```
//!
//! - [`source`]: HTTP client translating domain queries into API requests
//! - [`domain`]: `Quote`, `QueryOptions` and `Pagination` value objects
//! - [`term`]: the interactive menu and drill-down navigation sessions
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the interactive menu
//! quill
//!
//! # One-shot: print a random quote
//! quill random
//!
//! # One-shot: first page of quotes matching a term
//! quill search love --page 1
//! ```
//!
//! ## Modules
//!
//! - [`app`]: Application context and error types
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: TOML configuration (`~/.config/quill/config.toml`)
//! - [`domain`]: Core domain models
//! - [`source`]: Remote quote source client
//! - [`term`]: Interactive terminal session

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the quote
/// source and the loaded configuration.
pub mod app;

/// Command-line interface using clap.
///
/// Defines the CLI structure and one-shot subcommands:
/// - `random` - Print a random quote
/// - `genres` / `authors` - List what the source knows
/// - `search <term>` - Print one page of matches
///
/// Without a subcommand the interactive menu starts.
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/quill/config.toml`, supporting the source base
/// URL and the per-page quote limit.
pub mod config;

/// Core domain models.
///
/// - [`Quote`](domain::Quote): one quote with id, text, author, genre
/// - [`QueryOptions`](domain::QueryOptions): the active filter and its
///   query-string serialization
/// - [`Pagination`](domain::Pagination): page metadata with the wraparound
///   stepping rules
pub mod domain;

/// Remote quote source client.
///
/// - [`QuoteSource`](source::QuoteSource): async trait for quote fetching
/// - [`QuoteGarden`](source::quote_garden::QuoteGarden): reqwest-based
///   implementation
pub mod source;

/// Interactive terminal session.
///
/// Main menu plus per-filter navigation sessions: page through matches
/// with wraparound, draw random quotes from the page in hand, refine the
/// filter with an extra search term.
pub mod term;
