use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{PricingConfig, RateTable, StudioParkingRates};

use super::kind::PropertyKind;

/// Shared pricing interface for every property variant.
///
/// Rent is computed in two independent stages: `compute_base_rent` adds the
/// kind-specific surcharges and `apply_discount` decides discount eligibility.
/// Variants override either stage; `compute_final_rent` composes them and is
/// the entry point callers should use.
pub trait RentPricing {
    fn compute_base_rent(&self) -> Decimal;

    fn apply_discount(&self, rent: Decimal) -> Decimal {
        rent
    }

    fn compute_final_rent(&self) -> Decimal {
        self.apply_discount(self.compute_base_rent())
    }
}

/// Base rate, plus the extra room rate for two rooms, plus the garage rate.
fn standard_base_rent(rates: &RateTable, room_count: u8, has_parking: bool) -> Decimal {
    let mut rent = rates.base_rate;
    if room_count == 2 {
        rent += rates.extra_room_rate;
    }
    if has_parking {
        rent += rates.extra_parking_rate;
    }
    rent
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Apartment {
    rates: RateTable,
    no_children_factor: Decimal,
    pub room_count: u8,
    pub has_parking: bool,
    pub has_children: bool,
}

impl Apartment {
    pub fn new(config: &PricingConfig) -> Self {
        Self {
            rates: config.apartment,
            no_children_factor: config.apartment_no_children_factor,
            room_count: 1,
            has_parking: false,
            has_children: false,
        }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Whether the no-children discount applies to this apartment.
    pub fn discount_applies(&self) -> bool {
        !self.has_children
    }
}

impl RentPricing for Apartment {
    fn compute_base_rent(&self) -> Decimal {
        standard_base_rent(&self.rates, self.room_count, self.has_parking)
    }

    fn apply_discount(&self, rent: Decimal) -> Decimal {
        if self.discount_applies() {
            rent * self.no_children_factor
        } else {
            rent
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct House {
    rates: RateTable,
    pub room_count: u8,
    pub has_parking: bool,
}

impl House {
    pub fn new(config: &PricingConfig) -> Self {
        Self {
            rates: config.house,
            room_count: 1,
            has_parking: false,
        }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }
}

impl RentPricing for House {
    fn compute_base_rent(&self) -> Decimal {
        standard_base_rent(&self.rates, self.room_count, self.has_parking)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Studio {
    rates: RateTable,
    parking: StudioParkingRates,
    pub parking_spots: u32,
}

impl Studio {
    pub fn new(config: &PricingConfig) -> Self {
        Self {
            rates: config.studio,
            parking: config.studio_parking,
            parking_spots: 0,
        }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    fn parking_surcharge(&self) -> Decimal {
        if self.parking_spots == 0 {
            return Decimal::ZERO;
        }
        let extra_spots = self.parking_spots.saturating_sub(self.parking.bundle_spots);
        self.parking.bundle_price + self.parking.extra_spot_price * Decimal::from(extra_spots)
    }
}

impl RentPricing for Studio {
    // Studios ignore rooms and the garage rate entirely.
    fn compute_base_rent(&self) -> Decimal {
        self.rates.base_rate + self.parking_surcharge()
    }
}

/// Closed set of priced property variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Property {
    Apartment(Apartment),
    House(House),
    Studio(Studio),
}

impl Property {
    /// Creates a property of the given kind with default attributes.
    pub fn new(kind: PropertyKind, config: &PricingConfig) -> Self {
        match kind {
            PropertyKind::Apartment => Property::Apartment(Apartment::new(config)),
            PropertyKind::House => Property::House(House::new(config)),
            PropertyKind::Studio => Property::Studio(Studio::new(config)),
        }
    }

    pub fn kind(&self) -> PropertyKind {
        match self {
            Property::Apartment(_) => PropertyKind::Apartment,
            Property::House(_) => PropertyKind::House,
            Property::Studio(_) => PropertyKind::Studio,
        }
    }

    pub fn rates(&self) -> &RateTable {
        match self {
            Property::Apartment(apartment) => apartment.rates(),
            Property::House(house) => house.rates(),
            Property::Studio(studio) => studio.rates(),
        }
    }

    /// Sets the room count on apartments and houses; studios ignore it.
    pub fn set_room_count(&mut self, rooms: u8) {
        match self {
            Property::Apartment(apartment) => apartment.room_count = rooms,
            Property::House(house) => house.room_count = rooms,
            Property::Studio(_) => {}
        }
    }

    /// Sets the garage flag on apartments and houses; studios ignore it.
    pub fn set_parking(&mut self, has_parking: bool) {
        match self {
            Property::Apartment(apartment) => apartment.has_parking = has_parking,
            Property::House(house) => house.has_parking = has_parking,
            Property::Studio(_) => {}
        }
    }

    /// Only apartments read this flag.
    pub fn set_children(&mut self, has_children: bool) {
        if let Property::Apartment(apartment) = self {
            apartment.has_children = has_children;
        }
    }

    /// Only studios read this value.
    pub fn set_studio_parking_spots(&mut self, spots: u32) {
        if let Property::Studio(studio) = self {
            studio.parking_spots = spots;
        }
    }
}

impl RentPricing for Property {
    fn compute_base_rent(&self) -> Decimal {
        match self {
            Property::Apartment(apartment) => apartment.compute_base_rent(),
            Property::House(house) => house.compute_base_rent(),
            Property::Studio(studio) => studio.compute_base_rent(),
        }
    }

    fn apply_discount(&self, rent: Decimal) -> Decimal {
        match self {
            Property::Apartment(apartment) => apartment.apply_discount(rent),
            Property::House(house) => house.apply_discount(rent),
            Property::Studio(studio) => studio.apply_discount(rent),
        }
    }
}

impl From<Apartment> for Property {
    fn from(value: Apartment) -> Self {
        Property::Apartment(value)
    }
}

impl From<House> for Property {
    fn from(value: House) -> Self {
        Property::House(value)
    }
}

impl From<Studio> for Property {
    fn from(value: Studio) -> Self {
        Property::Studio(value)
    }
}
