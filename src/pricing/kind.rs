use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Apartment,
    House,
    Studio,
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 3] = [
        PropertyKind::Apartment,
        PropertyKind::House,
        PropertyKind::Studio,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PropertyKind::Apartment => "Apartment",
            PropertyKind::House => "House",
            PropertyKind::Studio => "Studio",
        }
    }

    /// Apartments and houses price rooms and a garage; studios do not.
    pub fn has_rooms_and_garage(self) -> bool {
        matches!(self, PropertyKind::Apartment | PropertyKind::House)
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PropertyKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        PropertyKind::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| format!("unknown property kind `{}`", value.trim()))
    }
}
