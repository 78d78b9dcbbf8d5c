//! Cardmarket API access: signed article queries and listing selection

mod client;
mod listings;
mod oauth;

pub use client::{CardmarketClient, ListingSource, DEFAULT_TIMEOUT};
pub use listings::{lowest_price, parse_listings, Address, Listing, Seller};
pub use oauth::OAuthSigner;
