//! MKM Inventory Tool - MTG sealed product valuation
//!
//! Looks up current Cardmarket prices for a tracked inventory and prints
//! per-country cost, value and gain reports.

pub mod cardmarket;
pub mod config;
pub mod error;
pub mod pricing;
pub mod report;
pub mod run;
pub mod summary;
pub mod utils;
pub mod valuation;

pub use cardmarket::{CardmarketClient, ListingSource};
pub use config::{AppConfig, CountrySelection, Documents, Inventory, LanguageTable, Palette};
pub use error::{InventoryError, Result};
pub use report::{CountryReport, ReportSession};
pub use run::{run, RunOutcome};
pub use summary::Totals;
pub use valuation::{GainClass, Valuation, ValuedItem};
