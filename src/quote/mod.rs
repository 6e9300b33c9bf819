//! Quote engine: rent snapshot, contract fee installments, and the 12-month projection.

pub mod projection;
pub mod summary;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::config::QuoteTerms;
use crate::errors::QuoteError;
use crate::pricing::{Property, RentPricing};

pub use projection::{ProjectionRow, YearMonth, PROJECTION_MONTHS};
pub use summary::QuoteSummary;

/// A priced property plus the installment plan for its contract fee.
///
/// `monthly_rent` is captured once in [`Quote::new`]. Later changes to the
/// property do not feed back into the quote.
#[derive(Debug, Clone)]
pub struct Quote {
    property: Property,
    terms: QuoteTerms,
    monthly_rent: Decimal,
    installment_count: u32,
    installment_amount: Decimal,
}

impl Quote {
    pub fn new(property: Property, terms: QuoteTerms) -> Self {
        let monthly_rent = property.compute_final_rent();
        debug!(
            kind = %property.kind(),
            %monthly_rent,
            "captured monthly rent for quote"
        );
        Self {
            property,
            terms,
            monthly_rent,
            installment_count: 1,
            installment_amount: terms.contract_fee,
        }
    }

    pub fn property(&self) -> &Property {
        &self.property
    }

    /// Mutable access to the owned property. Edits here do not reprice the quote.
    pub fn property_mut(&mut self) -> &mut Property {
        &mut self.property
    }

    pub fn contract_fee(&self) -> Decimal {
        self.terms.contract_fee
    }

    pub fn max_installments(&self) -> u32 {
        self.terms.max_installments
    }

    pub fn monthly_rent(&self) -> Decimal {
        self.monthly_rent
    }

    pub fn installment_count(&self) -> u32 {
        self.installment_count
    }

    pub fn installment_amount(&self) -> Decimal {
        self.installment_amount
    }

    /// Splits the contract fee into `count` equal installments.
    ///
    /// Counts outside `1..=max_installments` are rejected and leave the quote untouched.
    pub fn set_installment_count(&mut self, count: i64) -> Result<(), QuoteError> {
        let max = self.terms.max_installments;
        let valid = u32::try_from(count)
            .ok()
            .filter(|count| (1..=max).contains(count));
        let Some(count) = valid else {
            warn!(requested = count, max, "rejected installment count");
            return Err(QuoteError::InvalidInstallmentCount {
                requested: count,
                max,
            });
        };

        self.installment_count = count;
        self.installment_amount = self.terms.contract_fee / Decimal::from(count);
        info!(
            installments = count,
            amount = %self.installment_amount,
            "updated contract installments"
        );
        Ok(())
    }

    /// Rent plus installment, paid during the first `installment_count` months.
    pub fn first_months_total(&self) -> Decimal {
        self.monthly_rent + self.installment_amount
    }

    /// Rent alone, paid once the contract fee is settled.
    pub fn after_installments_total(&self) -> Decimal {
        self.monthly_rent
    }

    /// Projection starting the month after today's local date.
    pub fn generate_projection(&self) -> Vec<ProjectionRow> {
        self.projection_from(Local::now().date_naive())
    }

    /// Projection starting the month after `today`.
    pub fn projection_from(&self, today: NaiveDate) -> Vec<ProjectionRow> {
        self.projection_after(YearMonth::from_date(today))
    }

    /// Twelve rows for the months following `current`. Row `i` (1-based)
    /// carries an installment while `i <= installment_count`.
    pub fn projection_after(&self, current: YearMonth) -> Vec<ProjectionRow> {
        (1..=PROJECTION_MONTHS)
            .map(|index| {
                let contract_installment_amount = if index <= self.installment_count {
                    self.installment_amount
                } else {
                    Decimal::ZERO
                };
                ProjectionRow {
                    year_month: current.plus_months(index),
                    rent_amount: self.monthly_rent,
                    contract_installment_amount,
                    total_amount: self.monthly_rent + contract_installment_amount,
                }
            })
            .collect()
    }

    pub fn summary(&self) -> QuoteSummary {
        QuoteSummary::from_quote(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PricingConfig;
    use crate::pricing::PropertyKind;

    fn house_quote() -> Quote {
        let mut house = Property::new(PropertyKind::House, &PricingConfig::default());
        house.set_parking(true);
        Quote::new(house, QuoteTerms::default())
    }

    #[test]
    fn starts_with_single_installment() {
        let quote = house_quote();
        assert_eq!(quote.installment_count(), 1);
        assert_eq!(quote.installment_amount(), Decimal::from(2000));
        assert_eq!(quote.monthly_rent(), Decimal::from(1200));
    }

    #[test]
    fn rejected_count_leaves_state_untouched() {
        let mut quote = house_quote();
        quote.set_installment_count(4).unwrap();
        let err = quote.set_installment_count(-1).unwrap_err();
        assert_eq!(
            err,
            QuoteError::InvalidInstallmentCount {
                requested: -1,
                max: 5
            }
        );
        assert_eq!(quote.installment_count(), 4);
        assert_eq!(quote.installment_amount(), Decimal::from(500));
    }

    #[test]
    fn property_edits_do_not_reprice() {
        let mut quote = house_quote();
        quote.property_mut().set_room_count(2);
        assert_eq!(quote.monthly_rent(), Decimal::from(1200));
        assert_eq!(quote.property().compute_final_rent(), Decimal::from(1450));
    }

    #[test]
    fn installments_stop_after_count() {
        let mut quote = house_quote();
        quote.set_installment_count(2).unwrap();
        let rows = quote.projection_after(YearMonth::new(2025, 1).unwrap());
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[1].contract_installment_amount, Decimal::from(1000));
        assert_eq!(rows[2].contract_installment_amount, Decimal::ZERO);
        assert_eq!(rows[2].total_amount, Decimal::from(1200));
    }

    #[test]
    fn totals_for_summary() {
        let mut quote = house_quote();
        quote.set_installment_count(5).unwrap();
        assert_eq!(quote.first_months_total(), Decimal::from(1600));
        assert_eq!(quote.after_installments_total(), Decimal::from(1200));
    }
}
