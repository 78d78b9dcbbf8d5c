//! Blocking Cardmarket API client

use super::listings::{parse_listings, Listing};
use super::oauth::OAuthSigner;
use crate::config::Credentials;
use crate::error::{InventoryError, Result};
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can return the current listings of an article
pub trait ListingSource {
    /// Fetches listings for `article_id` in the given language.
    ///
    /// `Ok(None)` means the response could not be read as a listing array.
    /// Rejected credentials, quota exhaustion and other error statuses
    /// (except 404) are errors.
    fn fetch_listings(&self, article_id: u64, language_id: u32) -> Result<Option<Vec<Listing>>>;
}

/// Signed client for `<base_url>/articles/<id>`
pub struct CardmarketClient {
    client: reqwest::blocking::Client,
    base_url: String,
    signer: OAuthSigner,
}

impl CardmarketClient {
    pub fn new(base_url: &str, credentials: Credentials, timeout: Duration) -> Result<Self> {
        log::debug!("Creating Cardmarket client for {} (timeout {:?})", base_url, timeout);
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            signer: OAuthSigner::new(credentials),
        })
    }

    pub fn article_url(&self, article_id: u64) -> String {
        format!("{}/articles/{}", self.base_url, article_id)
    }
}

impl ListingSource for CardmarketClient {
    fn fetch_listings(&self, article_id: u64, language_id: u32) -> Result<Option<Vec<Listing>>> {
        let url = self.article_url(article_id);
        let query = vec![("idLanguage".to_string(), language_id.to_string())];
        let authorization = self.signer.authorization_header("GET", &url, &query)?;

        log::debug!("GET {} (idLanguage={})", url, language_id);
        let response = self
            .client
            .get(&url)
            .query(&query)
            .header(AUTHORIZATION, authorization)
            .header(USER_AGENT, "mkm_inventory/0.1")
            .send()?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(InventoryError::Unauthorized(status));
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(InventoryError::RateLimited(status));
        }
        // 404 means the article has no listings in this language
        if status.is_server_error() || (status.is_client_error() && status != StatusCode::NOT_FOUND) {
            return Err(InventoryError::HttpStatus(status));
        }

        let body = response.text()?;
        let listings = parse_listings(&body);
        if listings.is_none() {
            log::warn!(
                "Article {}: unreadable response (HTTP {}), price unavailable",
                article_id,
                status
            );
        }
        Ok(listings)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
