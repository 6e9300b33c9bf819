use rust_decimal::Decimal;
use serde::Serialize;

use crate::pricing::{Property, PropertyKind};
use crate::report::format_amount;

use super::Quote;

/// Property details worth repeating back to the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PropertyDetails {
    Rooms {
        room_count: u8,
        has_parking: bool,
        no_children_discount: bool,
    },
    Studio {
        parking_spots: u32,
    },
}

/// Flat view of a quote used by the terminal summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteSummary {
    pub kind: PropertyKind,
    pub details: PropertyDetails,
    pub monthly_rent: Decimal,
    pub contract_fee: Decimal,
    pub installment_count: u32,
    pub installment_amount: Decimal,
    pub first_months_total: Decimal,
    pub after_installments_total: Decimal,
}

impl QuoteSummary {
    pub fn from_quote(quote: &Quote) -> Self {
        let details = match quote.property() {
            Property::Apartment(apartment) => PropertyDetails::Rooms {
                room_count: apartment.room_count,
                has_parking: apartment.has_parking,
                no_children_discount: apartment.discount_applies(),
            },
            Property::House(house) => PropertyDetails::Rooms {
                room_count: house.room_count,
                has_parking: house.has_parking,
                no_children_discount: false,
            },
            Property::Studio(studio) => PropertyDetails::Studio {
                parking_spots: studio.parking_spots,
            },
        };

        Self {
            kind: quote.property().kind(),
            details,
            monthly_rent: quote.monthly_rent(),
            contract_fee: quote.contract_fee(),
            installment_count: quote.installment_count(),
            installment_amount: quote.installment_amount(),
            first_months_total: quote.first_months_total(),
            after_installments_total: quote.after_installments_total(),
        }
    }

    /// Renders the summary as plain text lines.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Property: {}", self.kind)];
        match &self.details {
            PropertyDetails::Rooms {
                room_count,
                has_parking,
                no_children_discount,
            } => {
                lines.push(format!("Rooms: {room_count}"));
                if *has_parking {
                    lines.push("Garage: yes".into());
                }
                if *no_children_discount {
                    lines.push("5% discount applied (no children)".into());
                }
            }
            PropertyDetails::Studio { parking_spots } => {
                lines.push(format!("Parking spots: {parking_spots}"));
            }
        }
        lines.push(format!("Monthly rent: {}", money(self.monthly_rent)));
        lines.push(format!("Contract fee: {}", money(self.contract_fee)));
        lines.push(format!("Installments: {}x", self.installment_count));
        lines.push(format!(
            "Contract installment: {}",
            money(self.installment_amount)
        ));
        lines.push(format!(
            "Monthly total (first {} months): {}",
            self.installment_count,
            money(self.first_months_total)
        ));
        lines.push(format!(
            "Monthly total (after installments): {}",
            money(self.after_installments_total)
        ));
        lines
    }
}

fn money(amount: Decimal) -> String {
    format!("R$ {}", format_amount(amount))
}
