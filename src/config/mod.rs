//! Fixed pricing tables and contract terms.
//!
//! Every value here is a build-time constant exposed through `Default`. The
//! structs are handed to the property and quote constructors so nothing in
//! the pricing core reaches for global state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const DEFAULT_REPORT_FILE: &str = "orcamento_parcelas.csv";

/// Monetary constants for one property kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateTable {
    pub base_rate: Decimal,
    pub extra_room_rate: Decimal,
    pub extra_parking_rate: Decimal,
}

impl RateTable {
    pub const fn new(base_rate: Decimal, extra_room_rate: Decimal, extra_parking_rate: Decimal) -> Self {
        Self {
            base_rate,
            extra_room_rate,
            extra_parking_rate,
        }
    }

    pub fn apartment() -> Self {
        Self::new(cents(70_000), cents(20_000), cents(30_000))
    }

    pub fn house() -> Self {
        Self::new(cents(90_000), cents(25_000), cents(30_000))
    }

    pub fn studio() -> Self {
        Self::new(cents(120_000), Decimal::ZERO, Decimal::ZERO)
    }
}

/// Studio parking is sold as a bundle covering the first spots, then per spot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudioParkingRates {
    pub bundle_price: Decimal,
    pub bundle_spots: u32,
    pub extra_spot_price: Decimal,
}

impl Default for StudioParkingRates {
    fn default() -> Self {
        Self {
            bundle_price: cents(25_000),
            bundle_spots: 2,
            extra_spot_price: cents(6_000),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricingConfig {
    pub apartment: RateTable,
    pub house: RateTable,
    pub studio: RateTable,
    pub studio_parking: StudioParkingRates,
    /// Multiplier applied to apartment rent when no children live there.
    pub apartment_no_children_factor: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            apartment: RateTable::apartment(),
            house: RateTable::house(),
            studio: RateTable::studio(),
            studio_parking: StudioParkingRates::default(),
            apartment_no_children_factor: Decimal::new(95, 2),
        }
    }
}

/// Contract fee and the bound on how many installments it may be split into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteTerms {
    pub contract_fee: Decimal,
    pub max_installments: u32,
}

impl Default for QuoteTerms {
    fn default() -> Self {
        Self {
            contract_fee: cents(200_000),
            max_installments: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    pub file_name: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_REPORT_FILE.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    pub pricing: PricingConfig,
    pub terms: QuoteTerms,
    pub report: ReportConfig,
}

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}
