//! agify-rs
//!
//! A lightweight Rust library for fetching per-name age/count statistics
//! from the agify.io API in batches and visualizing them. Pairs with the
//! `agify` CLI.
//!
//! ### Features
//! - Tokenize and resolve the CLI's two argument syntaxes (`-f value`,
//!   `--filename=value`) with duplicate detection
//! - Partition a name list into API-compliant batches of 10 and fetch
//!   them sequentially
//! - Aggregate heterogeneous single/list responses into per-name age and
//!   count maps
//! - Render a dual-axis SVG/PNG chart of the results
//!
//! ### Example
//! ```no_run
//! use agify_rs::Client;
//!
//! let names = agify_rs::source::load_names("names_reduced.txt")?;
//! let client = Client::default();
//! let responses = client.fetch(&names, Some("US"))?;
//! let stats = agify_rs::stats::aggregate(&responses);
//! agify_rs::viz::plot_stats(&stats, "names_reduced.txt", "ages.svg", 1000, 600)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod cli;
pub mod error;
pub mod models;
pub mod source;
pub mod stats;
pub mod viz;

pub use api::Client;
pub use cli::{Config, Resolution};
pub use error::Error;
pub use models::{BatchResponse, NameRecord};
pub use stats::NameStats;
