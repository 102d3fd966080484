//! Travel pacing style value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How densely a member wants the itinerary packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelStyle {
    /// Few scheduled activities, plenty of downtime.
    Relaxed,
    /// A mix of planned activities and free time.
    Balanced,
    /// Full days, see as much as possible.
    Packed,
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TravelStyle::Relaxed => "relaxed",
            TravelStyle::Balanced => "balanced",
            TravelStyle::Packed => "packed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_serde() {
        for style in [TravelStyle::Relaxed, TravelStyle::Balanced, TravelStyle::Packed] {
            let json = serde_json::to_string(&style).unwrap();
            let back: TravelStyle = serde_json::from_str(&json).unwrap();
            assert_eq!(style, back);
        }
    }
}
