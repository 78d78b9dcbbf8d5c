//! The per-country loop: look up, value, report

use crate::cardmarket::ListingSource;
use crate::config::{CountrySelection, Documents, Inventory, LanguageTable};
use crate::error::Result;
use crate::pricing::lookup_lowest_price;
use crate::report::{CountryReport, ReportSession};
use crate::valuation::ValuedItem;
use std::io::Write;

/// How the country loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every configured country was reported
    Completed,
    /// A stop entry was reached
    Stopped,
}

/// Values every inventory item under one selection
pub fn value_country<'a, S: ListingSource + ?Sized>(
    source: &S,
    inventory: &'a Inventory,
    selection: &CountrySelection,
    languages: &LanguageTable,
) -> Result<CountryReport<'a>> {
    let mut items = Vec::with_capacity(inventory.len());
    for item in inventory.items() {
        let price = lookup_lowest_price(source, item, selection, languages)?;
        items.push(ValuedItem::new(item, price));
    }
    Ok(CountryReport::new(selection.clone(), items))
}

/// Processes the configured countries in order, printing one report each
pub fn run<S, W>(
    documents: &Documents,
    source: &S,
    session: &mut ReportSession<'_, W>,
) -> Result<RunOutcome>
where
    S: ListingSource + ?Sized,
    W: Write,
{
    for entry in &documents.config.countries {
        if entry.selection == CountrySelection::StopRun {
            log::info!("Country entry '{}' is a stop entry, ending run", entry.key);
            return Ok(RunOutcome::Stopped);
        }

        log::info!(
            "Valuing {} items for {}",
            documents.inventory.len(),
            entry.selection.label()
        );
        let report = value_country(
            source,
            &documents.inventory,
            &entry.selection,
            &documents.languages,
        )?;

        if report.totals.priced_at_cost > 0 {
            log::warn!(
                "{}: {} item(s) have no current price and are counted at cost",
                entry.selection.label(),
                report.totals.priced_at_cost
            );
        }

        session.write_country(&report)?;
    }

    log::info!("All {} country entries processed", documents.config.countries.len());
    Ok(RunOutcome::Completed)
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
