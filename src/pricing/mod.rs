//! Property variants and the two-stage rent pipeline (surcharges, then discount).

pub mod kind;
pub mod property;

pub use kind::PropertyKind;
pub use property::{Apartment, House, Property, RentPricing, Studio};
