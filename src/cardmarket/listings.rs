//! Article listings as returned by `GET /articles/<id>`

use crate::config::CountrySelection;
use crate::utils::round2;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Address {
    pub country: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Seller {
    pub address: Address,
}

/// A single seller's offer for a product
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Listing {
    pub price: f64,
    pub seller: Seller,
}

impl Listing {
    pub fn new(price: f64, country: &str) -> Self {
        Self {
            price,
            seller: Seller {
                address: Address {
                    country: country.to_string(),
                },
            },
        }
    }

    pub fn country(&self) -> &str {
        &self.seller.address.country
    }
}

#[derive(Debug, Deserialize)]
struct ArticleResponse {
    article: Vec<Listing>,
}

/// Parses a response body; `None` when the body is empty or not an article list
pub fn parse_listings(body: &str) -> Option<Vec<Listing>> {
    match serde_json::from_str::<ArticleResponse>(body) {
        Ok(response) => Some(response.article),
        Err(e) => {
            log::debug!("Unreadable article response: {}", e);
            None
        }
    }
}

/// Lowest price among listings accepted by `selection`, rounded to cents
pub fn lowest_price(listings: &[Listing], selection: &CountrySelection) -> Option<f64> {
    listings
        .iter()
        .filter(|l| selection.accepts(l.country()))
        .map(|l| l.price)
        .filter(|p| p.is_finite())
        .min_by(|a, b| a.total_cmp(b))
        .map(round2)
}
