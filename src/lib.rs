#![doc(test(attr(deny(warnings))))]

//! Rental quote engine: prices a property, splits the contract fee into
//! installments, and projects the next twelve months of payments.

pub mod cli;
pub mod config;
pub mod errors;
pub mod pricing;
pub mod quote;
pub mod report;
pub mod utils;

pub use config::{AppConfig, PricingConfig, QuoteTerms};
pub use errors::{CliError, QuoteError, ReportError};
pub use pricing::{Property, PropertyKind, RentPricing};
pub use quote::{ProjectionRow, Quote, YearMonth};

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes global tracing and emits a startup log.
pub fn init() {
    INIT.call_once(|| {
        utils::init_tracing();
        tracing::info!("Rent quote tracing initialized.");
    });
}
