//! Accommodation preference value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of lodging a member prefers for the trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accommodation {
    Hotel,
    Hostel,
    Apartment,
    Resort,
}

impl Accommodation {
    /// All accommodation types in canonical order, used for stable
    /// tie-breaking.
    pub const ALL: [Accommodation; 4] = [
        Accommodation::Hotel,
        Accommodation::Hostel,
        Accommodation::Apartment,
        Accommodation::Resort,
    ];
}

impl fmt::Display for Accommodation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Accommodation::Hotel => "hotel",
            Accommodation::Hostel => "hostel",
            Accommodation::Apartment => "apartment",
            Accommodation::Resort => "resort",
        };
        write!(f, "{}", s)
    }
}
