//! Price lookup for a single inventory item under a country selection

use crate::cardmarket::{lowest_price, ListingSource};
use crate::config::{CountrySelection, InventoryItem, LanguageTable};
use crate::error::Result;

/// Returns the lowest matching price for `item`, or `None` when unavailable.
///
/// Fails for languages missing from `languages` and for transport errors;
/// unreadable responses and empty selections are not errors.
pub fn lookup_lowest_price<S: ListingSource + ?Sized>(
    source: &S,
    item: &InventoryItem,
    selection: &CountrySelection,
    languages: &LanguageTable,
) -> Result<Option<f64>> {
    let language_id = languages.resolve(&item.language)?;

    let Some(listings) = source.fetch_listings(item.article_id, language_id)? else {
        return Ok(None);
    };

    let price = lowest_price(&listings, selection);
    if price.is_none() {
        log::info!(
            "{}: no listings for {} out of {}",
            item.name,
            selection.label(),
            listings.len()
        );
    }
    Ok(price)
}
