use chrono::NaiveDate;
use rent_quote::{
    PricingConfig, Property, PropertyKind, Quote, QuoteError, QuoteTerms, RentPricing, YearMonth,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn apartment_quote() -> Quote {
    let mut property = Property::new(PropertyKind::Apartment, &PricingConfig::default());
    property.set_room_count(2);
    property.set_parking(true);
    Quote::new(property, QuoteTerms::default())
}

fn month(year: i32, month: u32) -> YearMonth {
    YearMonth::new(year, month).unwrap()
}

#[test]
fn installment_bounds_are_enforced() {
    let mut quote = apartment_quote();
    assert_eq!(
        quote.set_installment_count(0),
        Err(QuoteError::InvalidInstallmentCount { requested: 0, max: 5 })
    );
    assert_eq!(
        quote.set_installment_count(6),
        Err(QuoteError::InvalidInstallmentCount { requested: 6, max: 5 })
    );
    assert_eq!(quote.installment_count(), 1);
    assert_eq!(quote.installment_amount(), dec!(2000.00));

    quote.set_installment_count(5).unwrap();
    assert_eq!(quote.installment_amount(), dec!(400.00));
}

#[test]
fn error_message_names_the_bounds() {
    let mut quote = apartment_quote();
    let err = quote.set_installment_count(9).unwrap_err();
    assert_eq!(
        err.to_string(),
        "installment count must be between 1 and 5, got 9"
    );
}

#[test]
fn monthly_rent_is_a_snapshot() {
    let mut quote = apartment_quote();
    quote.property_mut().set_children(true);
    assert_eq!(quote.property().compute_final_rent(), dec!(1200.00));
    assert_eq!(quote.monthly_rent(), dec!(1140.00));
    assert!(quote
        .projection_after(month(2025, 1))
        .iter()
        .all(|row| row.rent_amount == dec!(1140.00)));
}

#[test]
fn projection_wraps_from_november() {
    let quote = apartment_quote();
    let rows = quote.projection_after(month(2025, 11));
    let months: Vec<YearMonth> = rows.iter().map(|row| row.year_month).collect();
    assert_eq!(months.len(), 12);
    assert_eq!(months[0], month(2025, 12));
    assert_eq!(months[1], month(2026, 1));
    assert_eq!(months[11], month(2026, 11));
}

#[test]
fn projection_from_date_starts_next_month() {
    let quote = apartment_quote();
    let rows = quote.projection_from(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    assert_eq!(rows[0].year_month.to_string(), "2026-01");
    assert_eq!(rows[11].year_month.to_string(), "2026-12");
}

#[test]
fn every_start_month_yields_valid_months() {
    let quote = apartment_quote();
    for start in 1..=12 {
        let rows = quote.projection_after(month(2030, start));
        for (index, row) in rows.iter().enumerate() {
            assert!((1..=12).contains(&row.year_month.month()));
            let offset = start + index as u32 + 1;
            let expected_year = 2030 + ((offset - 1) / 12) as i32;
            assert_eq!(row.year_month.year(), expected_year);
        }
    }
}

#[test]
fn installments_only_in_first_months() {
    let mut quote = apartment_quote();
    quote.set_installment_count(3).unwrap();
    let rows = quote.projection_after(month(2025, 6));
    for (index, row) in rows.iter().enumerate() {
        if index < 3 {
            assert_eq!(row.contract_installment_amount, quote.installment_amount());
        } else {
            assert_eq!(row.contract_installment_amount, Decimal::ZERO);
        }
        assert_eq!(row.total_amount, row.rent_amount + row.contract_installment_amount);
    }
}

#[test]
fn projection_is_idempotent() {
    let mut quote = apartment_quote();
    quote.set_installment_count(2).unwrap();
    assert_eq!(quote.generate_projection(), quote.generate_projection());
}

#[test]
fn totals_add_up() {
    for count in 1_i64..=5 {
        let mut quote = apartment_quote();
        quote.set_installment_count(count).unwrap();
        let rows = quote.projection_after(month(2025, 3));
        let sum: Decimal = rows.iter().map(|row| row.total_amount).sum();
        let expected = Decimal::from(12) * quote.monthly_rent()
            + Decimal::from(quote.installment_count()) * quote.installment_amount();
        assert_eq!(sum, expected, "{count} installments");
        if 2000 % count == 0 {
            assert_eq!(sum, dec!(13680.00) + dec!(2000.00));
        } else {
            assert_eq!(sum.round_dp(2), dec!(15680.00));
        }
    }
}

#[test]
fn thirds_round_to_the_contract_fee() {
    let mut quote = apartment_quote();
    quote.set_installment_count(3).unwrap();
    let paid: Decimal = quote
        .projection_after(month(2025, 3))
        .iter()
        .map(|row| row.contract_installment_amount)
        .sum();
    assert_eq!(paid.round_dp(2), dec!(2000.00));
}
