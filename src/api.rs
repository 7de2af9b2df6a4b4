//! Synchronous client for the **agify.io** name-demographics API.
//!
//! The API estimates a mean age and sample count per first name. Batch
//! queries are capped at 10 names per request, so an arbitrary-length name
//! list is partitioned into positional batches of 10 and issued one request
//! per batch, strictly in order.
//!
//! ### Notes
//! - A single-name query returns a lone JSON object; a multi-name query
//!   returns a JSON array. Both decode into [`BatchResponse`].
//! - There is no retry: the API is rate-limited and a failed batch aborts
//!   the whole fetch with no partial results.
//!
//! Typical usage:
//! ```no_run
//! # use agify_rs::Client;
//! let client = Client::default();
//! let responses = client.fetch(&["alice".into(), "bob".into()], None)?;
//! # Ok::<(), agify_rs::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::models::BatchResponse;
use log::debug;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;

/// Maximum number of names the API accepts in one batch query.
pub const BATCH_SIZE: usize = 10;

// Allow -, _, . unescaped in names
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc(part: &str) -> String {
    percent_encoding::utf8_percent_encode(part.trim(), SAFE).to_string()
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("agify_rs/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .expect("reqwest client build");
        Self {
            base_url: "https://api.agify.io".into(),
            http,
        }
    }
}

impl Client {
    /// Build the query URL for one batch: one `name[]` parameter per entry
    /// plus, when a country filter is set, a single `country_id` parameter
    /// appended once per query.
    fn batch_url(&self, batch: &[String], country: Option<&str>) -> String {
        let mut url = format!("{}/?", self.base_url);
        for (i, name) in batch.iter().enumerate() {
            if i > 0 {
                url.push('&');
            }
            url.push_str("name[]=");
            url.push_str(&enc(name));
        }
        if let Some(code) = country {
            url.push_str(&format!("&country_id={}", enc(code)));
        }
        url
    }

    /// The full list of query URLs that [`Client::fetch`] would issue for
    /// `names`, one per batch of [`BATCH_SIZE`], preserving input order.
    ///
    /// Batch boundaries are purely positional: every 10th name starts a
    /// new batch regardless of content.
    pub fn batch_urls(&self, names: &[String], country: Option<&str>) -> Vec<String> {
        names
            .chunks(BATCH_SIZE)
            .map(|batch| self.batch_url(batch, country))
            .collect()
    }

    /// Fetch age/count statistics for `names`, optionally filtered to a
    /// country code.
    ///
    /// Requests are issued sequentially in batch order; batch *i* is fully
    /// resolved before batch *i+1* goes out. A non-success status on any
    /// batch fails the whole fetch with [`Error::RequestFailed`] and no
    /// partial results.
    ///
    /// ### Returns
    /// One [`BatchResponse`] per issued batch, in batch order. An empty
    /// name list issues no requests and returns an empty vector.
    pub fn fetch(&self, names: &[String], country: Option<&str>) -> Result<Vec<BatchResponse>> {
        let mut out = Vec::with_capacity(names.len().div_ceil(BATCH_SIZE));

        for batch in names.chunks(BATCH_SIZE) {
            let url = self.batch_url(batch, country);
            debug!("GET {url}");
            let resp = self.http.get(&url).send()?;
            if !resp.status().is_success() {
                return Err(Error::RequestFailed(resp.status()));
            }
            out.push(resp.json::<BatchResponse>()?);
        }

        Ok(out)
    }
}
