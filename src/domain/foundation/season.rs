//! Travel season windows members can express a preference for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// School-holiday aligned travel windows.
///
/// These are the windows the group can realistically travel in, so
/// preferences are collected against this fixed set rather than free
/// dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Cny,
    Easter,
    JuneHoliday,
    SeptemberHoliday,
    YearEnd,
}

impl Season {
    /// All seasons in canonical order, used for stable tie-breaking.
    pub const ALL: [Season; 5] = [
        Season::Cny,
        Season::Easter,
        Season::JuneHoliday,
        Season::SeptemberHoliday,
        Season::YearEnd,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Season::Cny => "Chinese New Year",
            Season::Easter => "Easter",
            Season::JuneHoliday => "June holidays",
            Season::SeptemberHoliday => "September holidays",
            Season::YearEnd => "Year-end holidays",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(serde_json::to_string(&Season::Cny).unwrap(), "\"cny\"");
        assert_eq!(
            serde_json::to_string(&Season::JuneHoliday).unwrap(),
            "\"june_holiday\""
        );
    }

    #[test]
    fn deserializes_from_snake_case() {
        let season: Season = serde_json::from_str("\"year_end\"").unwrap();
        assert_eq!(season, Season::YearEnd);
    }

    #[test]
    fn all_lists_every_variant_once() {
        assert_eq!(Season::ALL.len(), 5);
        let mut seen = std::collections::HashSet::new();
        for s in Season::ALL {
            assert!(seen.insert(s));
        }
    }

    #[test]
    fn labels_are_human_readable() {
        assert_eq!(Season::Cny.label(), "Chinese New Year");
        assert_eq!(Season::SeptemberHoliday.label(), "September holidays");
    }
}
